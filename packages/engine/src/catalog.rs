//! Catalog store
//!
//! Static lookup tables (periods, reasons, statuses, evaluation criteria)
//! referenced by id from document content. The tables are compiled into the
//! binary from `data/catalogs.yaml` and parsed once on first use.
//!
//! # Example
//!
//! ```
//! use minelev_engine::catalog::catalogs;
//!
//! let period = catalogs().period("02").unwrap();
//! assert_eq!(period.value.nb, "Halvårsvurdering 2. termin");
//! ```

use crate::error::{DocumentError, Result};
use crate::types::LocalizedText;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

const EMBEDDED_CATALOGS: &str = include_str!("../data/catalogs.yaml");

#[allow(clippy::expect_used)] // Embedded data is checked by the catalog tests
static CATALOGS: LazyLock<Catalogs> = LazyLock::new(|| {
    Catalogs::from_yaml_str(EMBEDDED_CATALOGS).expect("embedded catalogs are valid")
});

/// The process-wide catalogs.
pub fn catalogs() -> &'static Catalogs {
    &CATALOGS
}

/// Anything stored in a [`Catalog`].
pub trait CatalogItem {
    fn id(&self) -> &str;
}

/// Id plus localized text. Used for periods and conversation statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub value: LocalizedText,
}

/// A warning reason: `description` is shown to teachers, `value` is what the
/// student reads in the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reason {
    pub id: String,
    pub description: LocalizedText,
    pub value: LocalizedText,
}

/// Delivery status of an issued document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentStatus {
    pub id: String,
    pub short: LocalizedText,
    pub description: LocalizedText,
}

/// Title of a YFF evaluation criterion. Only written forms of Norwegian exist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionTitle {
    pub nb: String,
    pub nn: String,
}

/// A criterion the workplace scores in a YFF placement feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationCriterion {
    pub id: String,
    pub title: CriterionTitle,
}

macro_rules! impl_catalog_item {
    ($($ty:ty),*) => {
        $(impl CatalogItem for $ty {
            fn id(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_catalog_item!(CatalogEntry, Reason, DocumentStatus, EvaluationCriterion);

/// An ordered, duplicate-free table keyed by id.
#[derive(Debug, Clone)]
pub struct Catalog<T> {
    name: &'static str,
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: CatalogItem> Catalog<T> {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(name: &'static str, items: Vec<T>) -> Result<Self> {
        let mut index = HashMap::with_capacity(items.len());
        for (position, item) in items.iter().enumerate() {
            if index.insert(item.id().to_string(), position).is_some() {
                return Err(DocumentError::Catalog(format!(
                    "duplicate id \"{}\" in {}",
                    item.id(),
                    name
                )));
            }
        }
        Ok(Self { name, items, index })
    }

    /// Name used in not-found errors, e.g. `"courseReason"`.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Exact-match lookup by id.
    pub fn get(&self, id: &str) -> Option<&T> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// Lookup that fails with [`DocumentError::NotFound`] naming this catalog.
    pub fn require(&self, id: &str) -> Result<&T> {
        self.get(id)
            .ok_or_else(|| DocumentError::not_found(self.name, id))
    }

    /// Entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Deserialize)]
struct CatalogData {
    document_statuses: Vec<DocumentStatus>,
    periods: Vec<CatalogEntry>,
    course_reasons: Vec<Reason>,
    order_reasons: Vec<Reason>,
    behaviour_reasons: Vec<Reason>,
    conversation_statuses: Vec<CatalogEntry>,
    evaluation_criteria: Vec<EvaluationCriterion>,
}

/// All lookup catalogs.
#[derive(Debug, Clone)]
pub struct Catalogs {
    pub document_statuses: Catalog<DocumentStatus>,
    pub periods: Catalog<CatalogEntry>,
    pub course_reasons: Catalog<Reason>,
    pub order_reasons: Catalog<Reason>,
    pub behaviour_reasons: Catalog<Reason>,
    pub conversation_statuses: Catalog<CatalogEntry>,
    pub evaluation_criteria: Catalog<EvaluationCriterion>,
}

impl Catalogs {
    /// Parse catalogs from YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is malformed or any catalog repeats an id.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let data: CatalogData = serde_yaml_ng::from_str(content)?;

        let catalogs = Self {
            document_statuses: Catalog::new("documentStatus", data.document_statuses)?,
            periods: Catalog::new("period", data.periods)?,
            course_reasons: Catalog::new("courseReason", data.course_reasons)?,
            order_reasons: Catalog::new("orderReason", data.order_reasons)?,
            behaviour_reasons: Catalog::new("behaviourReason", data.behaviour_reasons)?,
            conversation_statuses: Catalog::new(
                "conversationStatus",
                data.conversation_statuses,
            )?,
            evaluation_criteria: Catalog::new("evaluationCriterion", data.evaluation_criteria)?,
        };

        tracing::debug!(
            periods = catalogs.periods.len(),
            course_reasons = catalogs.course_reasons.len(),
            order_reasons = catalogs.order_reasons.len(),
            behaviour_reasons = catalogs.behaviour_reasons.len(),
            "Loaded catalogs"
        );

        Ok(catalogs)
    }

    pub fn period(&self, id: &str) -> Option<&CatalogEntry> {
        self.periods.get(id)
    }

    pub fn course_reason(&self, id: &str) -> Option<&Reason> {
        self.course_reasons.get(id)
    }

    pub fn order_reason(&self, id: &str) -> Option<&Reason> {
        self.order_reasons.get(id)
    }

    pub fn behaviour_reason(&self, id: &str) -> Option<&Reason> {
        self.behaviour_reasons.get(id)
    }

    pub fn document_status(&self, id: &str) -> Option<&DocumentStatus> {
        self.document_statuses.get(id)
    }

    pub fn conversation_status(&self, id: &str) -> Option<&CatalogEntry> {
        self.conversation_statuses.get(id)
    }

    pub fn evaluation_criterion(&self, id: &str) -> Option<&EvaluationCriterion> {
        self.evaluation_criteria.get(id)
    }
}
