//! Presents a zone's plain and geo record sets as one read-only view.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::Result;
use crate::model::RecordSet;
use crate::traits::{GeoRecordSetApi, ReadOnlyRecordSetApi, RecordSetApi};
use crate::types::RecordSetStream;

/// Concatenation of a plain API followed by a geo API over the same zone.
///
/// Plain entries are always emitted before geo entries. Neither side is consulted until
/// the returned stream reaches it.
#[derive(Clone)]
pub struct ConcatRecordSets {
    plain: Arc<dyn RecordSetApi>,
    geo: Arc<dyn GeoRecordSetApi>,
}

impl ConcatRecordSets {
    /// Combines `plain` and `geo`.
    pub fn new(plain: Arc<dyn RecordSetApi>, geo: Arc<dyn GeoRecordSetApi>) -> Self {
        Self { plain, geo }
    }
}

/// Emits `head` and then the stream produced by `tail`, creating the tail only once the
/// head has been exhausted.
fn then_lazily<'a, F>(head: RecordSetStream<'a>, tail: F) -> RecordSetStream<'a>
where
    F: FnOnce() -> Result<RecordSetStream<'a>> + Send + 'a,
{
    let tail = stream::once(future::lazy(move |_| tail())).try_flatten();
    head.chain(tail).boxed()
}

impl ReadOnlyRecordSetApi for ConcatRecordSets {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        let plain = self.plain.list()?;
        Ok(then_lazily(plain, move || self.geo.list()))
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>> {
        let plain = self.plain.list_by_name(name)?;
        let name = name.to_string();
        Ok(then_lazily(plain, move || self.geo.list_by_name(&name)))
    }

    /// The plain side contributes at most one entry, fetched by exact name and type.
    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        let name = name.to_string();
        let record_type = record_type.to_string();

        let plain_name = name.clone();
        let plain_type = record_type.clone();
        let plain = stream::once(async move {
            self.plain
                .get_by_name_and_type(&plain_name, &plain_type)
                .await
        })
        .try_filter_map(|found| future::ready(Ok(found)))
        .boxed();

        Ok(then_lazily(plain, move || {
            self.geo.list_by_name_and_type(&name, &record_type)
        }))
    }
}

#[async_trait]
impl GeoRecordSetApi for ConcatRecordSets {
    async fn get_by_name_type_and_group(
        &self,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> Result<Option<RecordSet>> {
        self.geo
            .get_by_name_type_and_group(name, record_type, group)
            .await
    }
}
