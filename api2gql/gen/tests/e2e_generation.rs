//! End-to-end tests: descriptor JSON in, artifact files out.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use api2gql_define::ApiDescriptor;
use api2gql_gen::options::GeneratorOptions;
use api2gql_gen::output::{generate, generate_and_write};

fn fixture(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn load(name: &str) -> ApiDescriptor {
    let json = fs::read_to_string(fixture(name)).expect("Failed to read fixture");
    ApiDescriptor::from_json(&json).expect("Fixture should parse")
}

const DESCRIBE_LOCAL_VOLUMES_QUERY: &str = "\
query describelocalvolumes(
  $Action: String!,
  $Version: String!,
  $InstanceName: String,
  $Marker: Float,
  $MaxResults: Float,
  $test: Boolean
) {
  describelocalvolumes(
    Action: $Action,
    Version: $Version,
    InstanceName: $InstanceName,
    Marker: $Marker,
    MaxResults: $MaxResults,
    test: $test
  ) {
    RequestId
    Marker
    MarkerCount
    InstanceList {
      ...InstanceListData
    }
    DBList {
      ...DBListData
    }
    UserInfo {
      name
      age
    }
  }
}

fragment InstanceListData on ResDescribeLocalVolumesInstanceListItem {
  InstanceName
  InstanceStatus
  Memory
  CPU
  Tag
  arrayObj {
    arrayObjName
    arrayObjAge
  }
  arrayList {
    ...arrayListData
  }
}

fragment arrayListData on ResDescribeLocalVolumesInstanceListItemarrayListItem {
  arrayListName
  arrayListAge
}

fragment DBListData on ResDescribeLocalVolumesDBListItem {
  DBname
  DBstatus
}
";

#[test]
fn describe_local_volumes_query_matches_expected_text() {
    let artifacts = generate(&load("describe_local_volumes.json"), &GeneratorOptions::default())
        .expect("generation should succeed");
    assert_eq!(artifacts.query, DESCRIBE_LOCAL_VOLUMES_QUERY);
}

#[test]
fn describe_local_volumes_declares_every_referenced_type() {
    let artifacts = generate(&load("describe_local_volumes.json"), &GeneratorOptions::default())
        .expect("generation should succeed");
    let defs = &artifacts.type_defs;

    let declared = [
        "DescribeLocalVolumesParams",
        "ResDescribeLocalVolumesInstanceListItemarrayObj",
        "ResDescribeLocalVolumesInstanceListItemarrayListItem",
        "ResDescribeLocalVolumesInstanceListItem",
        "ResDescribeLocalVolumesDBListItem",
        "ResDescribeLocalVolumesUserInfo",
        "ResDescribeLocalVolumes",
    ];
    let mut last = 0;
    for name in declared {
        let position = defs
            .find(&format!("export class {name} {{"))
            .unwrap_or_else(|| panic!("{} is not declared", name));
        assert!(position >= last, "{} is out of order", name);
        last = position;
    }
    assert_eq!(defs.matches("export class ").count(), declared.len());

    assert!(defs.contains("  @Field()\n  Action!: string;\n"));
    assert!(defs.contains("  @Field({ nullable: true })\n  test?: boolean;\n"));
}

#[test]
fn describe_local_volumes_resolver_binds_all_parameters() {
    let artifacts = generate(&load("describe_local_volumes.json"), &GeneratorOptions::default())
        .expect("generation should succeed");
    assert!(artifacts.resolver.contains(
        "@Args() { Action, Version, InstanceName, Marker, MaxResults, test }: DescribeLocalVolumesParams"
    ));
    assert!(artifacts.resolver.contains(
        "const res = await requestAPI(ctx, 'DescribeLocalVolumes', 'GET', { Action, Version, InstanceName, Marker, MaxResults, test });"
    ));
}

#[test]
fn writes_three_files_with_imports() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let api = load("describe_local_volumes.json");

    generate_and_write(
        &api,
        temp_dir.path(),
        "describe_local_volumes",
        &GeneratorOptions::default(),
        false,
    )
    .expect("generation should succeed");

    let query = fs::read_to_string(temp_dir.path().join("describe_local_volumes.gql")).unwrap();
    assert_eq!(query, DESCRIBE_LOCAL_VOLUMES_QUERY);

    let type_defs = fs::read_to_string(temp_dir.path().join("typeDefs.ts")).unwrap();
    assert!(type_defs.starts_with("import { Field, ObjectType, ArgsType, Float } from 'type-graphql';\n\n"));

    let resolvers = fs::read_to_string(temp_dir.path().join("resolvers.ts")).unwrap();
    assert!(resolvers.contains(
        "import { DescribeLocalVolumesParams, ResDescribeLocalVolumes } from './typeDefs';\n"
    ));
    assert!(resolvers.contains("import { requestAPI } from '../../utils/request';\n"));
}

#[test]
fn post_endpoint_becomes_mutation_only_when_asked() {
    let api = load("create_volume.json");

    let default = generate(&api, &GeneratorOptions::default()).unwrap();
    assert!(default.query.starts_with("query createvolume {\n"));
    assert!(default.resolver.contains("@Query((returns) => ResCreateVolume)"));

    let by_method = GeneratorOptions {
        operation_from_method: true,
        ..GeneratorOptions::default()
    };
    let mutation = generate(&api, &by_method).unwrap();
    assert!(mutation.query.starts_with("mutation createvolume {\n"));
    assert!(mutation.resolver.contains("@Mutation((returns) => ResCreateVolume)"));
}

#[test]
fn empty_array_fixture_is_rejected() {
    let json = fs::read_to_string(fixture("empty_array.json")).unwrap();
    let err = ApiDescriptor::from_json(&json).unwrap_err();
    assert!(err.to_string().contains("'Items' is empty"));
}
