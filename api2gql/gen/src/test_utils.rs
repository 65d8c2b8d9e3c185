//! Shared test utilities for api2gql-gen tests.
//!
//! Fixtures are written as JSON, the same way descriptors are authored, and
//! normalized through [`ApiDescriptor::from_value`].

use api2gql_define::{ApiDescriptor, Shape};
use serde_json::{Value, json};

/// Normalizes a JSON fixture, panicking on invalid input.
pub fn api_from(value: Value) -> ApiDescriptor {
    ApiDescriptor::from_value(value).expect("fixture must be a valid descriptor")
}

/// The `GetItem` descriptor: one required parameter and one array of records.
pub fn get_item_api() -> ApiDescriptor {
    api_from(json!({
        "API_NAME": "GetItem",
        "METHOD": "GET",
        "PARAMETERS": ["id (string, required)"],
        "RESPONSE": {
            "id": "string",
            "tags": [{ "label": "string" }]
        }
    }))
}

/// Response shape of [`get_item_api`].
pub fn get_item_response() -> Shape {
    get_item_api().response
}

/// A list endpoint with nested records and arrays at several depths.
pub fn cluster_instance_api() -> ApiDescriptor {
    api_from(json!({
        "API_NAME": "ClusterInstanceList",
        "METHOD": "GET",
        "PARAMETERS": [
            "InstanceName (string, optional)",
            "Marker (number, optional)",
            "MaxResults (number, optional)"
        ],
        "RESPONSE": {
            "RequestId": "string",
            "Marker": "number",
            "MarkerCount": "number",
            "InstanceList": [{
                "InstanceName": "string",
                "InstanceStatus": "string",
                "Memory": "number",
                "CPU": "string",
                "Tags": {
                    "TagName": "string",
                    "TagValue": "number"
                },
                "SubInstance": [{
                    "SubInstanceName": "string",
                    "SubInstanceStatus": "string"
                }]
            }],
            "DBList": [{
                "DBname": "string",
                "DBstatus": "string"
            }],
            "UserInfo": {
                "name": "string",
                "age": "number"
            }
        }
    }))
}

/// Response shape of [`cluster_instance_api`].
pub fn cluster_instance_response() -> Shape {
    cluster_instance_api().response
}

/// A write endpoint without parameters and without arrays.
pub fn create_volume_api() -> ApiDescriptor {
    api_from(json!({
        "API_NAME": "CreateVolume",
        "METHOD": "POST",
        "PARAMETERS": [],
        "RESPONSE": {
            "VolumeId": "string",
            "Ready": "boolean",
            "Sizes": [10, 20]
        }
    }))
}
