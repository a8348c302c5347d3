//! DynamoDB implementation of the URL repository.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_config::BehaviorVersion;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};

use crate::domain::entities::{UrlPatch, UrlRecord};
use crate::domain::repositories::UrlRepository;
use crate::error::StoreError;
use crate::utils::timestamp;

const CONDITIONAL_CHECK_FAILED: &str = "ConditionalCheckFailedException";

const SLUG: &str = "slug";
const FULL_URL: &str = "fullUrl";
const CREATED_AT: &str = "createdAt";
const UPDATED_AT: &str = "updatedAt";

/// DynamoDB repository for URL records.
///
/// The table's partition key is the string attribute `slug`. Items hold
/// `fullUrl`, `createdAt` and `updatedAt` as strings.
pub struct DynamoUrlRepository {
    client: Client,
    table_name: String,
}

impl DynamoUrlRepository {
    /// Creates a repository over an existing client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Builds a client from the ambient AWS configuration (region and
    /// credentials from the environment), optionally pointed at a custom
    /// endpoint such as DynamoDB Local.
    pub async fn connect(table_name: impl Into<String>, endpoint_url: Option<&str>) -> Self {
        let sdk_config = aws_config::load_defaults(BehaviorVersion::latest()).await;

        let mut builder = aws_sdk_dynamodb::config::Builder::from(&sdk_config);
        if let Some(endpoint_url) = endpoint_url {
            builder = builder.endpoint_url(endpoint_url);
        }

        Self::new(Client::from_conf(builder.build()), table_name)
    }

    fn key(slug: &str) -> AttributeValue {
        AttributeValue::S(slug.to_string())
    }
}

#[async_trait]
impl UrlRepository for DynamoUrlRepository {
    async fn find_by_slug(&self, slug: &str) -> Result<Option<UrlRecord>, StoreError> {
        let output = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key(SLUG, Self::key(slug))
            .send()
            .await
            .map_err(store_error)?;

        output.item().map(record_from_item).transpose()
    }

    async fn create(&self, record: UrlRecord) -> Result<(), StoreError> {
        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item_from_record(&record)))
            .condition_expression("attribute_not_exists(#slug)")
            .expression_attribute_names("#slug", SLUG)
            .send()
            .await
            .map_err(store_error)?;

        Ok(())
    }

    async fn list(&self) -> Result<Vec<UrlRecord>, StoreError> {
        let mut records = Vec::new();
        let mut start_key = None;

        loop {
            let output = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(store_error)?;

            for item in output.items() {
                records.push(record_from_item(item)?);
            }

            match output.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        Ok(records)
    }

    async fn update(&self, slug: &str, patch: UrlPatch) -> Result<UrlRecord, StoreError> {
        let output = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key(SLUG, Self::key(slug))
            .update_expression("SET #fullUrl = :fullUrl, #updatedAt = :updatedAt")
            .condition_expression("attribute_exists(#slug)")
            .expression_attribute_names("#slug", SLUG)
            .expression_attribute_names("#fullUrl", FULL_URL)
            .expression_attribute_names("#updatedAt", UPDATED_AT)
            .expression_attribute_values(":fullUrl", AttributeValue::S(patch.full_url))
            .expression_attribute_values(
                ":updatedAt",
                AttributeValue::S(timestamp::format(&patch.updated_at)),
            )
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(store_error)?;

        let attributes = output
            .attributes()
            .ok_or_else(|| StoreError::backend("update returned no attributes"))?;

        record_from_item(attributes)
    }

    async fn delete(&self, slug: &str) -> Result<(), StoreError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key(SLUG, Self::key(slug))
            .condition_expression("attribute_exists(#slug)")
            .expression_attribute_names("#slug", SLUG)
            .send()
            .await
            .map_err(store_error)?;

        Ok(())
    }
}

/// Maps an SDK failure, keeping condition-check failures distinct.
fn store_error<E, R>(err: SdkError<E, R>) -> StoreError
where
    E: ProvideErrorMetadata + std::error::Error + 'static,
    R: std::fmt::Debug + 'static,
{
    if err.code() == Some(CONDITIONAL_CHECK_FAILED) {
        return StoreError::ConditionFailed;
    }

    StoreError::backend(DisplayErrorContext(&err))
}

fn item_from_record(record: &UrlRecord) -> HashMap<String, AttributeValue> {
    HashMap::from([
        (SLUG.to_string(), AttributeValue::S(record.slug.clone())),
        (FULL_URL.to_string(), AttributeValue::S(record.full_url.clone())),
        (
            CREATED_AT.to_string(),
            AttributeValue::S(timestamp::format(&record.created_at)),
        ),
        (
            UPDATED_AT.to_string(),
            AttributeValue::S(timestamp::format(&record.updated_at)),
        ),
    ])
}

fn record_from_item(item: &HashMap<String, AttributeValue>) -> Result<UrlRecord, StoreError> {
    let created_at = timestamp::parse(string_attr(item, CREATED_AT)?)
        .map_err(|e| StoreError::backend(format!("invalid {CREATED_AT}: {e}")))?;
    let updated_at = timestamp::parse(string_attr(item, UPDATED_AT)?)
        .map_err(|e| StoreError::backend(format!("invalid {UPDATED_AT}: {e}")))?;

    Ok(UrlRecord {
        slug: string_attr(item, SLUG)?.to_string(),
        full_url: string_attr(item, FULL_URL)?.to_string(),
        created_at,
        updated_at,
    })
}

fn string_attr<'a>(
    item: &'a HashMap<String, AttributeValue>,
    name: &str,
) -> Result<&'a str, StoreError> {
    item.get(name)
        .and_then(|value| value.as_s().ok())
        .map(String::as_str)
        .ok_or_else(|| StoreError::backend(format!("item is missing string attribute `{name}`")))
}
