//! Database operations for `brand_insights`.
//!
//! One row per store URL. List-valued and nested fields are stored as JSONB
//! serialized from the `brandscope_core` model; a save replaces every field.

use brandscope_core::{BrandRecord, InsightSink};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use sqlx::{PgPool, Postgres, Transaction};

use crate::DbError;

/// A row from the `brand_insights` table.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct BrandInsightRow {
    pub id: i64,
    pub website_url: String,
    pub product_catalog: Value,
    pub hero_products: Value,
    pub privacy_policy: Option<String>,
    pub return_policy: Option<String>,
    pub faqs: Value,
    pub social_handles: Value,
    pub contact_details: Value,
    pub brand_context: Option<String>,
    pub important_links: Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BrandInsightRow {
    /// Decodes the JSONB columns back into a [`BrandRecord`].
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Deserialize`] if a column no longer matches the
    /// record shape.
    pub fn into_record(self) -> Result<BrandRecord, DbError> {
        Ok(BrandRecord {
            website_url: self.website_url,
            product_catalog: from_column("product_catalog", self.product_catalog)?,
            hero_products: from_column("hero_products", self.hero_products)?,
            privacy_policy: self.privacy_policy,
            return_policy: self.return_policy,
            faqs: from_column("faqs", self.faqs)?,
            social_handles: from_column("social_handles", self.social_handles)?,
            contact_details: from_column("contact_details", self.contact_details)?,
            brand_context: self.brand_context,
            important_links: from_column("important_links", self.important_links)?,
        })
    }
}

/// JSONB payloads for one record, serialized before any query runs.
struct InsightColumns {
    product_catalog: Value,
    hero_products: Value,
    faqs: Value,
    social_handles: Value,
    contact_details: Value,
    important_links: Value,
}

impl InsightColumns {
    fn from_record(record: &BrandRecord) -> Result<Self, DbError> {
        Ok(Self {
            product_catalog: to_column("product_catalog", &record.product_catalog)?,
            hero_products: to_column("hero_products", &record.hero_products)?,
            faqs: to_column("faqs", &record.faqs)?,
            social_handles: to_column("social_handles", &record.social_handles)?,
            contact_details: to_column("contact_details", &record.contact_details)?,
            important_links: to_column("important_links", &record.important_links)?,
        })
    }
}

fn to_column<T: Serialize + ?Sized>(field: &'static str, value: &T) -> Result<Value, DbError> {
    serde_json::to_value(value).map_err(|source| DbError::Serialize { field, source })
}

fn from_column<T: DeserializeOwned>(field: &'static str, value: Value) -> Result<T, DbError> {
    serde_json::from_value(value).map_err(|source| DbError::Deserialize { field, source })
}

/// Inserts or fully overwrites the insight row for `record.website_url`.
///
/// Runs one `INSERT ... ON CONFLICT (website_url) DO UPDATE` inside a
/// transaction, so concurrent first saves of the same URL resolve to
/// last-writer-wins rather than a unique-key violation. `created_at` is kept
/// from the first save; `updated_at` is bumped on every overwrite. On any
/// failure the transaction is rolled back before the error is returned.
///
/// Returns the row `id`.
///
/// # Errors
///
/// - [`DbError::Serialize`] if a field cannot be encoded as JSON (nothing
///   is written).
/// - [`DbError::Sqlx`] on any query, commit, or rollback failure.
pub async fn upsert_brand_insight(pool: &PgPool, record: &BrandRecord) -> Result<i64, DbError> {
    let columns = InsightColumns::from_record(record)?;

    let mut tx = pool.begin().await?;
    match write_insight(&mut tx, record, &columns).await {
        Ok(id) => {
            tx.commit().await?;
            tracing::debug!(website_url = %record.website_url, id, "brand insights saved");
            Ok(id)
        }
        Err(e) => {
            if let Err(rollback_err) = tx.rollback().await {
                tracing::warn!(
                    website_url = %record.website_url,
                    error = %rollback_err,
                    "rollback after failed brand insight write also failed"
                );
            }
            Err(e)
        }
    }
}

async fn write_insight(
    tx: &mut Transaction<'_, Postgres>,
    record: &BrandRecord,
    columns: &InsightColumns,
) -> Result<i64, DbError> {
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO brand_insights \
             (website_url, product_catalog, hero_products, privacy_policy, return_policy, \
              faqs, social_handles, contact_details, brand_context, important_links) \
         VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
         ON CONFLICT (website_url) DO UPDATE SET \
             product_catalog = EXCLUDED.product_catalog, \
             hero_products   = EXCLUDED.hero_products, \
             privacy_policy  = EXCLUDED.privacy_policy, \
             return_policy   = EXCLUDED.return_policy, \
             faqs            = EXCLUDED.faqs, \
             social_handles  = EXCLUDED.social_handles, \
             contact_details = EXCLUDED.contact_details, \
             brand_context   = EXCLUDED.brand_context, \
             important_links = EXCLUDED.important_links, \
             updated_at      = NOW() \
         RETURNING id",
    )
    .bind(&record.website_url)
    .bind(&columns.product_catalog)
    .bind(&columns.hero_products)
    .bind(&record.privacy_policy)
    .bind(&record.return_policy)
    .bind(&columns.faqs)
    .bind(&columns.social_handles)
    .bind(&columns.contact_details)
    .bind(&record.brand_context)
    .bind(&columns.important_links)
    .fetch_one(&mut **tx)
    .await?;

    Ok(id)
}

/// Fetches the stored insight row for `website_url`.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on query failure.
pub async fn get_brand_insight_by_url(
    pool: &PgPool,
    website_url: &str,
) -> Result<Option<BrandInsightRow>, DbError> {
    let row = sqlx::query_as::<_, BrandInsightRow>(
        "SELECT id, website_url, product_catalog, hero_products, privacy_policy, \
                return_policy, faqs, social_handles, contact_details, brand_context, \
                important_links, created_at, updated_at \
         FROM brand_insights WHERE website_url = $1",
    )
    .bind(website_url)
    .fetch_optional(pool)
    .await?;

    Ok(row)
}

/// Loads the stored record for `website_url`.
///
/// # Errors
///
/// - [`DbError::NotFound`] if no row exists for the URL.
/// - [`DbError::Deserialize`] if a stored column no longer decodes.
/// - [`DbError::Sqlx`] on query failure.
pub async fn load_brand_record(pool: &PgPool, website_url: &str) -> Result<BrandRecord, DbError> {
    get_brand_insight_by_url(pool, website_url)
        .await?
        .ok_or(DbError::NotFound)?
        .into_record()
}

/// Number of stored brand insight rows.
///
/// # Errors
///
/// Returns [`DbError::Sqlx`] on query failure.
pub async fn count_brand_insights(pool: &PgPool) -> Result<i64, DbError> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM brand_insights")
        .fetch_one(pool)
        .await?;
    Ok(count)
}

/// Postgres-backed [`InsightSink`].
#[derive(Debug, Clone)]
pub struct PgInsightStore {
    pool: PgPool,
}

impl PgInsightStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl InsightSink for PgInsightStore {
    type Error = DbError;

    async fn save(&self, record: &BrandRecord) -> Result<(), Self::Error> {
        upsert_brand_insight(&self.pool, record).await.map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_serialize_record_fields() {
        let mut record = BrandRecord::empty("https://acme.myshopify.com");
        record.faqs.push(brandscope_core::Faq {
            question: "Q".to_string(),
            answer: "A".to_string(),
        });
        record.important_links.insert(
            brandscope_core::LinkKind::ContactUs,
            "https://acme.myshopify.com/pages/contact".to_string(),
        );

        let columns = InsightColumns::from_record(&record).expect("serialize");

        assert_eq!(columns.product_catalog, serde_json::json!([]));
        assert_eq!(
            columns.faqs,
            serde_json::json!([{"question": "Q", "answer": "A"}])
        );
        assert_eq!(
            columns.important_links,
            serde_json::json!({"contact_us": "https://acme.myshopify.com/pages/contact"})
        );
        assert_eq!(
            columns.contact_details,
            serde_json::json!({"emails": [], "phones": [], "addresses": []})
        );
    }

    #[test]
    fn malformed_column_reports_field() {
        let err = from_column::<Vec<brandscope_core::Faq>>("faqs", serde_json::json!({"x": 1}))
            .expect_err("shape mismatch");
        assert!(matches!(err, DbError::Deserialize { field: "faqs", .. }));
    }
}
