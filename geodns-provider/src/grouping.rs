//! Folds a sorted stream of raw directional records into portable geo record sets.

use std::pin::Pin;

use futures::stream::{self, Peekable, Stream, StreamExt};
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};
use crate::model::{GeoConfig, RecordData, RecordSet};
use crate::territory::TerritoryResolver;
use crate::types::RecordSetStream;

/// Identity of a directional group as referenced by raw vendor records.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DirectionalGroup {
    /// Vendor id, used to resolve territories.
    pub id: String,
    /// Group name, surfaced as the geo group name.
    pub name: String,
}

impl DirectionalGroup {
    /// Creates a group reference.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// The minimal shape of a raw vendor directional record the grouping engine needs.
pub trait DirectionalRecord {
    /// Owner name.
    fn name(&self) -> &str;

    /// Mnemonic type.
    fn record_type(&self) -> &str;

    /// TTL in seconds, if the vendor set one.
    fn ttl(&self) -> Option<u32>;

    /// The group this record is served to. `None` is a vendor data error.
    fn group(&self) -> Option<&DirectionalGroup>;

    /// Placeholder meaning "serve nothing"; never surfaces as a record set.
    fn is_no_response(&self) -> bool;

    /// Portable form of this record's rdata.
    fn rdata(&self) -> Result<RecordData>;
}

/// Sorts records so that members of the same future record set are contiguous:
/// by owner name, type, ttl and group.
pub fn sort_for_grouping<R: DirectionalRecord>(records: &mut [R]) {
    records.sort_by(|a, b| {
        a.name()
            .cmp(b.name())
            .then_with(|| a.record_type().cmp(b.record_type()))
            .then_with(|| a.ttl().cmp(&b.ttl()))
            .then_with(|| a.group().cmp(&b.group()))
    });
}

fn same_record_set<R: DirectionalRecord>(actual: &R, expected: &R) -> bool {
    actual.name() == expected.name()
        && actual.record_type() == expected.record_type()
        && actual.ttl() == expected.ttl()
        && actual.group() == expected.group()
}

/// Lazy grouping state machine over a sorted record stream.
///
/// Holds a one-element lookahead over the input. Each produced record set consumes one
/// contiguous run of records sharing owner name, type, ttl and group identity. The input must already
/// be sorted (see [`sort_for_grouping`]); out-of-order input yields split record sets rather
/// than an error.
pub struct GroupGeoRecords<S: Stream> {
    records: Pin<Box<Peekable<S>>>,
    territories: TerritoryResolver,
    provider: &'static str,
}

impl<S, R> GroupGeoRecords<S>
where
    S: Stream<Item = Result<R>> + Send,
    R: DirectionalRecord + Send + Sync,
{
    /// Wraps `sorted`. Territories are looked up through `territories`, which should be
    /// scoped to the current listing call.
    pub fn new(sorted: S, territories: TerritoryResolver, provider: &'static str) -> Self {
        Self {
            records: Box::pin(sorted.peekable()),
            territories,
            provider,
        }
    }

    /// Skips leading no-response records and reports whether any input remains.
    ///
    /// A pending upstream error counts as remaining input; [`next`](Self::next) returns it.
    pub async fn has_next(&mut self) -> bool {
        loop {
            let skip = match self.records.as_mut().peek().await {
                None => return false,
                Some(Ok(record)) => record.is_no_response(),
                Some(Err(_)) => false,
            };
            if !skip {
                return true;
            }
            if let Some(Ok(record)) = self.records.next().await {
                log::debug!(
                    "[{}] Skipping no-response record {} {}: not portable",
                    self.provider,
                    record.name(),
                    record.record_type()
                );
            }
        }
    }

    /// Produces the next record set and advances past its run.
    pub async fn next(&mut self) -> Option<Result<RecordSet>> {
        if !self.has_next().await {
            return None;
        }
        match self.records.next().await? {
            Ok(seed) => Some(self.fold_run(seed).await),
            Err(e) => Some(Err(e)),
        }
    }

    async fn fold_run(&mut self, seed: R) -> Result<RecordSet> {
        let group = seed
            .group()
            .cloned()
            .ok_or_else(|| ProviderError::ParseError {
                provider: self.provider.to_string(),
                detail: format!(
                    "directional record {} {} has no group",
                    seed.name(),
                    seed.record_type()
                ),
            })?;
        // Once per run; peers are compared by group identity, not by territories.
        let territories = self.territories.resolve(&group.id).await?;

        let mut builder = RecordSet::builder()
            .name(seed.name())
            .record_type(seed.record_type())
            .ttl_opt(seed.ttl())
            .geo(GeoConfig::new(group.name, territories)?);
        builder.push(seed.rdata()?);

        while self.has_next().await {
            let same_run = match self.records.as_mut().peek().await {
                Some(Ok(next)) => same_record_set(next, &seed),
                _ => false,
            };
            if !same_run {
                break;
            }
            match self.records.next().await {
                Some(Ok(next)) => builder.push(next.rdata()?),
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }

        builder.build()
    }

    /// Exposes the state machine as a record set stream.
    pub fn into_stream<'a>(self) -> RecordSetStream<'a>
    where
        S: 'a,
        R: 'a,
    {
        stream::unfold(self, |mut groups| async move {
            groups.next().await.map(|item| (item, groups))
        })
        .boxed()
    }
}
