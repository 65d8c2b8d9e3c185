//! Validation module for endpoint descriptors.
//!
//! Generated identifiers are derived from field names, so two different
//! fields can produce the same fragment or class name. Nothing downstream
//! would catch that until the generated GraphQL or TypeScript fails to load,
//! so this pass reports it before generation.
//!
//! ## Validation Checks
//!
//! - **Fragment collisions**: fragment names use the field name alone, so two
//!   array-of-record fields with the same name at different depths collide
//! - **Type collisions**: class names concatenate the field path, so `a.bc`
//!   and `ab.c` both become `Res<Api>abc`
//!
//! ## Examples
//!
//! ```
//! use api2gql_define::ApiDescriptor;
//! use api2gql_gen::validation::validate_descriptor;
//!
//! let api = ApiDescriptor::from_json(r#"{
//!     "API_NAME": "GetItem",
//!     "METHOD": "GET",
//!     "RESPONSE": { "tags": [{ "label": "string" }] }
//! }"#).unwrap();
//!
//! assert!(validate_descriptor(&api).is_ok());
//! ```

use std::collections::HashMap;

use api2gql_define::ApiDescriptor;

use crate::errors::GeneratorError;
use crate::naming::{fragment_name, params_type, response_type};
use crate::walker::{collect_record_types, find_array_objects};

/// Label used for the parameters class in collision reports.
const PARAMETERS_PATH: &str = "<parameters>";

/// Label used for the root response class in collision reports.
const RESPONSE_PATH: &str = "<response>";

/// Validates a descriptor before code generation.
///
/// ## Errors
///
/// Returns `GeneratorError::NamingCollision` for the first duplicated
/// fragment name, or else the first duplicated type name.
pub fn validate_descriptor(api: &ApiDescriptor) -> Result<(), GeneratorError> {
    let root = response_type(&api.name);

    let mut fragments: HashMap<String, String> = HashMap::new();
    for fragment in find_array_objects(&api.response, &root) {
        claim(&mut fragments, "fragment", fragment_name(fragment.name), fragment.path)?;
    }

    let mut types: HashMap<String, String> = HashMap::new();
    claim(&mut types, "type", params_type(&api.name), PARAMETERS_PATH.to_string())?;
    for record in collect_record_types(&api.response, &root) {
        let path = if record.path.is_empty() {
            RESPONSE_PATH.to_string()
        } else {
            record.path
        };
        claim(&mut types, "type", record.type_name, path)?;
    }

    Ok(())
}

fn claim(
    seen: &mut HashMap<String, String>,
    kind: &'static str,
    name: String,
    path: String,
) -> Result<(), GeneratorError> {
    if let Some(first) = seen.get(&name) {
        return Err(GeneratorError::NamingCollision {
            kind,
            name,
            first: first.clone(),
            second: path,
        });
    }
    seen.insert(name, path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{api_from, cluster_instance_api, create_volume_api, get_item_api};
    use serde_json::json;

    #[test]
    fn fixtures_pass_validation() {
        assert!(validate_descriptor(&get_item_api()).is_ok());
        assert!(validate_descriptor(&cluster_instance_api()).is_ok());
        assert!(validate_descriptor(&create_volume_api()).is_ok());
    }

    #[test]
    fn same_array_name_at_two_depths_is_a_fragment_collision() {
        let api = api_from(json!({
            "API_NAME": "ListThings",
            "METHOD": "GET",
            "RESPONSE": {
                "Items": [{ "id": "string" }],
                "Page": { "Items": [{ "other": "number" }] }
            }
        }));

        match validate_descriptor(&api).unwrap_err() {
            GeneratorError::NamingCollision {
                kind,
                name,
                first,
                second,
            } => {
                assert_eq!(kind, "fragment");
                assert_eq!(name, "ItemsData");
                assert_eq!(first, "Items");
                assert_eq!(second, "Page.Items");
            }
            other => panic!("Expected NamingCollision, got: {:?}", other),
        }
    }

    #[test]
    fn concatenated_paths_can_collide_as_types() {
        let api = api_from(json!({
            "API_NAME": "X",
            "METHOD": "GET",
            "RESPONSE": {
                "a": { "bc": { "v": "string" } },
                "ab": { "c": { "w": "string" } }
            }
        }));

        match validate_descriptor(&api).unwrap_err() {
            GeneratorError::NamingCollision {
                kind,
                name,
                first,
                second,
            } => {
                assert_eq!(kind, "type");
                assert_eq!(name, "ResXabc");
                assert_eq!(first, "a.bc");
                assert_eq!(second, "ab.c");
            }
            other => panic!("Expected NamingCollision, got: {:?}", other),
        }
    }

    #[test]
    fn record_named_like_array_item_collides() {
        // "tagsItem" (record) and "tags" (array) both name ResTtagsItem
        let api = api_from(json!({
            "API_NAME": "T",
            "METHOD": "GET",
            "RESPONSE": {
                "tags": [{ "label": "string" }],
                "tagsItem": { "label": "string" }
            }
        }));
        let err = validate_descriptor(&api).unwrap_err();
        assert!(matches!(
            err,
            GeneratorError::NamingCollision { kind: "type", ref name, .. } if name == "ResTtagsItem"
        ));
    }

    #[test]
    fn error_display_is_actionable() {
        let api = api_from(json!({
            "API_NAME": "ListThings",
            "METHOD": "GET",
            "RESPONSE": {
                "Items": [{ "id": "string" }],
                "Page": { "Items": [{ "id": "string" }] }
            }
        }));
        let msg = validate_descriptor(&api).unwrap_err().to_string();
        assert!(msg.contains("ItemsData"));
        assert!(msg.contains("Page.Items"));
        assert!(msg.contains("rename"));
    }
}
