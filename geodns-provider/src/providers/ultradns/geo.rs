//! Geo record sets regrouped from directional pools

use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::Result;
use crate::grouping::{GroupGeoRecords, sort_for_grouping};
use crate::model::{RecordSet, group_name_equal_to};
use crate::providers::common::same_name;
use crate::territory::TerritoryResolver;
use crate::traits::{GeoRecordSetApi, ReadOnlyRecordSetApi, require};
use crate::types::RecordSetStream;

use super::{DirectionalPool, DirectionalPoolClient, PROVIDER_ID, PoolGroupLoader};

/// Geo record sets of one zone, rebuilt from the zone's directional pools.
///
/// Each pool's records are sorted and folded by the grouping engine. Pools are read one
/// at a time as the stream advances; territory lookups are shared across the pools of a
/// single listing call and never across calls.
pub struct UltraDnsGeoRecordSetApi {
    client: Arc<dyn DirectionalPoolClient>,
    zone: String,
}

impl UltraDnsGeoRecordSetApi {
    pub(crate) fn new(client: Arc<dyn DirectionalPoolClient>, zone: &str) -> Self {
        Self {
            client,
            zone: zone.to_string(),
        }
    }

    fn record_sets(&self, name: Option<String>, record_type: Option<String>) -> RecordSetStream<'static> {
        let territories =
            TerritoryResolver::new(Arc::new(PoolGroupLoader(self.client.clone())));

        let client = self.client.clone();
        let zone = self.zone.clone();
        let pool_name = name.clone();
        let pools = stream::once(async move { client.list_pools(&zone).await })
            .map_ok(move |pools| {
                let matching: Vec<Result<DirectionalPool>> = pools
                    .into_iter()
                    .filter(|pool| {
                        pool_name
                            .as_deref()
                            .is_none_or(|name| same_name(&pool.dname, name))
                    })
                    .map(Ok)
                    .collect();
                stream::iter(matching)
            })
            .try_flatten();

        let client = self.client.clone();
        pools
            .map_ok(move |pool| {
                pool_record_sets(
                    client.clone(),
                    pool,
                    name.clone(),
                    record_type.clone(),
                    territories.clone(),
                )
            })
            .try_flatten()
            .boxed()
    }
}

/// Fetches one pool and folds its records into record sets.
fn pool_record_sets(
    client: Arc<dyn DirectionalPoolClient>,
    pool: DirectionalPool,
    name: Option<String>,
    record_type: Option<String>,
    territories: TerritoryResolver,
) -> RecordSetStream<'static> {
    stream::once(async move {
        let mut records = client.list_pool_records(&pool.id).await?;
        log::debug!(
            "[{PROVIDER_ID}] Pool {} ({}) has {} records",
            pool.id,
            pool.dname,
            records.len()
        );
        records.retain(|detail| {
            name.as_deref().is_none_or(|name| same_name(&detail.name, name))
                && record_type
                    .as_deref()
                    .is_none_or(|ty| detail.record.record_type == ty)
        });
        sort_for_grouping(&mut records);

        let sorted = stream::iter(records.into_iter().map(Ok));
        Ok(GroupGeoRecords::new(sorted, territories, PROVIDER_ID).into_stream())
    })
    .try_flatten()
    .boxed()
}

impl ReadOnlyRecordSetApi for UltraDnsGeoRecordSetApi {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        Ok(self.record_sets(None, None))
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>> {
        require(PROVIDER_ID, "name", name)?;
        Ok(self.record_sets(Some(name.to_string()), None))
    }

    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        require(PROVIDER_ID, "name", name)?;
        require(PROVIDER_ID, "type", record_type)?;
        Ok(self.record_sets(Some(name.to_string()), Some(record_type.to_string())))
    }
}

#[async_trait]
impl GeoRecordSetApi for UltraDnsGeoRecordSetApi {
    async fn get_by_name_type_and_group(
        &self,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> Result<Option<RecordSet>> {
        require(PROVIDER_ID, "group", group)?;
        let group = group.to_string();
        let mut matches = self
            .list_by_name_and_type(name, record_type)?
            .try_filter(move |rrset| future::ready(group_name_equal_to(&group)(rrset)));
        matches.next().await.transpose()
    }
}
