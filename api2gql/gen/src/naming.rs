//! Identifier derivation shared by every generator.
//!
//! The query's fragment `on` clauses, the type declarations and the resolver
//! all refer to the same classes. Deriving every name here keeps the three
//! artifacts in agreement.
//!
//! ## Naming Rules
//!
//! | Item                    | Rule                         | Example                       |
//! |-------------------------|------------------------------|-------------------------------|
//! | Operation / root field  | lower-cased API name         | `getitem`                     |
//! | Root response type      | `Res` + API name             | `ResGetItem`                  |
//! | Nested record type      | parent type + field          | `ResGetItemUserInfo`          |
//! | Array element type      | parent type + field + `Item` | `ResGetItemtagsItem`          |
//! | Fragment                | field + `Data`               | `tagsData`                    |
//! | Parameters class        | API name + `Params`          | `GetItemParams`               |
//! | Resolver class          | API name + `Resolver`        | `GetItemResolver`             |

/// Operation name and root query field (both the lower-cased API name).
pub fn operation_name(api_name: &str) -> String {
    api_name.to_lowercase()
}

/// Root response type name.
pub fn response_type(api_name: &str) -> String {
    format!("Res{api_name}")
}

/// Type name for a nested record field.
pub fn nested_record_type(parent_type: &str, field: &str) -> String {
    format!("{parent_type}{field}")
}

/// Type name for the element of an array-of-record field.
pub fn array_item_type(parent_type: &str, field: &str) -> String {
    format!("{parent_type}{field}Item")
}

/// Fragment name for an array-of-record field.
///
/// Only the field name participates, so equal field names at different
/// depths share a fragment name.
pub fn fragment_name(field: &str) -> String {
    format!("{field}Data")
}

/// Arguments class name.
pub fn params_type(api_name: &str) -> String {
    format!("{api_name}Params")
}

/// Resolver class name.
pub fn resolver_type(api_name: &str) -> String {
    format!("{api_name}Resolver")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn operation_name_is_lowercased() {
        assert_eq!(operation_name("ClusterInstanceList"), "clusterinstancelist");
        assert_eq!(operation_name("getitem"), "getitem");
    }

    #[test]
    fn type_names_concatenate_the_path() {
        let root = response_type("GetItem");
        assert_eq!(root, "ResGetItem");

        let user = nested_record_type(&root, "UserInfo");
        assert_eq!(user, "ResGetItemUserInfo");

        let item = array_item_type(&root, "tags");
        assert_eq!(item, "ResGetItemtagsItem");

        assert_eq!(
            array_item_type(&item, "SubInstance"),
            "ResGetItemtagsItemSubInstanceItem"
        );
    }

    #[test]
    fn fragment_and_class_names() {
        assert_eq!(fragment_name("DBList"), "DBListData");
        assert_eq!(params_type("GetItem"), "GetItemParams");
        assert_eq!(resolver_type("GetItem"), "GetItemResolver");
    }
}
