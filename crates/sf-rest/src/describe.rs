//! Describe operations and types.
//!
//! Metadata about the sobject types of an org and their fields. Only the
//! commonly used attributes are modeled; everything else the API returns is
//! kept in the `extra` maps.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

// ============================================================================
// Describe Global Types
// ============================================================================

/// Result of `GET sobjects/`: every sobject type available to the user.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DescribeGlobal {
    /// Character encoding (e.g., "UTF-8").
    pub encoding: String,

    /// Maximum number of records in a batch request.
    #[serde(rename = "maxBatchSize")]
    pub max_batch_size: u32,

    pub sobjects: Vec<SObjectSummary>,
}

impl DescribeGlobal {
    /// Look up a type by API name.
    pub fn sobject(&self, name: &str) -> Option<&SObjectSummary> {
        self.sobjects.iter().find(|s| s.name == name)
    }
}

/// Basic information about a single sobject type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SObjectSummary {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural", default)]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix", default)]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub queryable: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub deletable: bool,
    #[serde(default)]
    pub searchable: bool,
    #[serde(default)]
    pub urls: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ============================================================================
// Describe SObject Types
// ============================================================================

/// Result of `GET sobjects/{type}/`: basic metadata plus recently used records.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DescribeSObject {
    #[serde(rename = "objectDescribe")]
    pub object_describe: SObjectSummary,
    #[serde(rename = "recentItems", default)]
    pub recent_items: Vec<Value>,
}

/// Result of `GET sobjects/{type}/describe/`: full field and relationship
/// metadata for one type.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DescribeLayout {
    pub name: String,
    pub label: String,
    #[serde(rename = "labelPlural", default)]
    pub label_plural: Option<String>,
    #[serde(rename = "keyPrefix", default)]
    pub key_prefix: Option<String>,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub fields: Vec<FieldDescribe>,
    #[serde(rename = "childRelationships", default)]
    pub child_relationships: Vec<ChildRelationship>,
    #[serde(rename = "recordTypeInfos", default)]
    pub record_type_infos: Vec<RecordTypeInfo>,
    #[serde(default)]
    pub urls: HashMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl DescribeLayout {
    /// Find a field by API name.
    pub fn field(&self, name: &str) -> Option<&FieldDescribe> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Names of the fields that accept a value on create.
    pub fn createable_fields(&self) -> Vec<&str> {
        self.fields
            .iter()
            .filter(|f| f.createable)
            .map(|f| f.name.as_str())
            .collect()
    }
}

/// Child relationship metadata.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ChildRelationship {
    #[serde(rename = "childSObject")]
    pub child_sobject: String,
    pub field: String,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: Option<String>,
    #[serde(rename = "cascadeDelete", default)]
    pub cascade_delete: bool,
}

/// Record type information.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RecordTypeInfo {
    pub name: String,
    #[serde(rename = "recordTypeId")]
    pub record_type_id: Option<String>,
    #[serde(default)]
    pub available: bool,
    #[serde(rename = "defaultRecordTypeMapping", default)]
    pub default_record_type_mapping: bool,
}

// ============================================================================
// Field Describe Types
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldDescribe {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub length: Option<u32>,
    #[serde(default)]
    pub nillable: bool,
    #[serde(default)]
    pub createable: bool,
    #[serde(default)]
    pub updateable: bool,
    #[serde(default)]
    pub custom: bool,
    #[serde(rename = "referenceTo", default)]
    pub reference_to: Vec<String>,
    #[serde(rename = "relationshipName", default)]
    pub relationship_name: Option<String>,
    #[serde(rename = "picklistValues", default)]
    pub picklist_values: Vec<PicklistValue>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PicklistValue {
    pub value: String,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(rename = "defaultValue", default)]
    pub default_value: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_global_deserialize() {
        let json = r#"{
            "encoding": "UTF-8",
            "maxBatchSize": 200,
            "sobjects": [
                {
                    "name": "Account",
                    "label": "Account",
                    "labelPlural": "Accounts",
                    "keyPrefix": "001",
                    "custom": false,
                    "queryable": true,
                    "createable": true,
                    "updateable": true,
                    "deletable": true,
                    "searchable": true,
                    "layoutable": true,
                    "urls": {"sobject": "/services/data/v24.0/sobjects/Account"}
                }
            ]
        }"#;

        let result: DescribeGlobal = serde_json::from_str(json).unwrap();
        assert_eq!(result.encoding, "UTF-8");
        assert_eq!(result.max_batch_size, 200);

        let account = result.sobject("Account").unwrap();
        assert_eq!(account.key_prefix.as_deref(), Some("001"));
        assert!(account.queryable);
        assert_eq!(account.extra.get("layoutable"), Some(&Value::Bool(true)));
        assert!(result.sobject("Nope__c").is_none());
    }

    #[test]
    fn test_describe_sobject_deserialize() {
        let json = r#"{
            "objectDescribe": {"name": "Contact", "label": "Contact", "createable": true},
            "recentItems": [{"attributes": {"type": "Contact"}, "Id": "003A"}]
        }"#;

        let result: DescribeSObject = serde_json::from_str(json).unwrap();
        assert_eq!(result.object_describe.name, "Contact");
        assert!(result.object_describe.createable);
        assert!(!result.object_describe.deletable);
        assert_eq!(result.recent_items.len(), 1);
    }

    #[test]
    fn test_describe_layout_deserialize() {
        let json = r#"{
            "name": "Account",
            "label": "Account",
            "fields": [
                {"name": "Id", "label": "Account ID", "type": "id", "length": 18, "nillable": false, "createable": false},
                {"name": "Name", "label": "Account Name", "type": "string", "length": 255, "createable": true, "updateable": true},
                {"name": "Type", "label": "Account Type", "type": "picklist", "createable": true,
                 "picklistValues": [{"value": "Prospect", "label": "Prospect", "active": true}]}
            ],
            "childRelationships": [
                {"childSObject": "Contact", "field": "AccountId", "relationshipName": "Contacts", "cascadeDelete": false}
            ],
            "recordTypeInfos": [
                {"name": "Master", "recordTypeId": "012000000000000AAA", "available": true, "defaultRecordTypeMapping": true}
            ]
        }"#;

        let result: DescribeLayout = serde_json::from_str(json).unwrap();
        assert_eq!(result.fields.len(), 3);
        assert_eq!(result.field("Name").unwrap().length, Some(255));
        assert_eq!(result.createable_fields(), vec!["Name", "Type"]);
        assert_eq!(result.field("Type").unwrap().picklist_values[0].value, "Prospect");
        assert_eq!(
            result.child_relationships[0].relationship_name.as_deref(),
            Some("Contacts")
        );
        assert!(result.record_type_infos[0].default_record_type_mapping);
    }
}
