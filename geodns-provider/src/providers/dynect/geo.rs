//! Geo record sets exploded from geo services
//!
//! A geo service links a set of nodes to a set of region groups without saying which
//! record set belongs to which node: every record set of every group applies to every
//! node. Listing therefore emits one record set per (record set, node) pair.

use std::sync::Arc;

use async_trait::async_trait;
use futures::future;
use futures::stream::{self, StreamExt, TryStreamExt};

use crate::error::{ProviderError, Result};
use crate::model::{GeoConfig, RecordSet, RecordSetBuilder};
use crate::providers::common::{parse_rdata_text, same_name};
use crate::traits::{GeoRecordSetApi, ReadOnlyRecordSetApi, require};
use crate::types::RecordSetStream;

use super::{GeoRegionGroup, GeoService, GeoServiceClient, Node, PROVIDER_ID, RawRecordSet};

/// Node, group and type predicates of one listing call. `None` matches everything.
#[derive(Debug, Clone)]
struct GeoFilter {
    zone: String,
    name: Option<String>,
    record_type: Option<String>,
    group: Option<String>,
}

impl GeoFilter {
    fn zone(zone: &str) -> Self {
        Self {
            zone: zone.to_string(),
            name: None,
            record_type: None,
            group: None,
        }
    }

    fn node(&self, node: &Node) -> bool {
        same_name(&node.zone, &self.zone)
            && self
                .name
                .as_deref()
                .is_none_or(|name| same_name(&node.fqdn, name))
    }

    fn group(&self, group: &GeoRegionGroup) -> bool {
        self.group.as_deref().is_none_or(|name| group.name == name)
    }

    fn record_set(&self, rrset: &RawRecordSet) -> bool {
        self.record_type
            .as_deref()
            .is_none_or(|ty| rrset.record_type == ty)
    }
}

/// Everything but the owner name, for each matching (group, record set) pair.
fn templates(service: &GeoService, filter: &GeoFilter) -> Result<Vec<RecordSetBuilder>> {
    let mut templates = Vec::new();
    for group in service.groups.iter().filter(|g| filter.group(g)) {
        let geo = GeoConfig::new(group.name.as_str(), group.countries.clone())?;
        for raw in group.record_sets.iter().filter(|r| filter.record_set(r)) {
            let rdata = raw
                .rdata
                .iter()
                .map(|value| parse_rdata_text(&raw.record_type, value, PROVIDER_ID))
                .collect::<Result<Vec<_>>>()?;
            templates.push(
                RecordSet::builder()
                    .record_type(raw.record_type.as_str())
                    .ttl_opt(raw.ttl)
                    .add_all(rdata)
                    .geo(geo.clone()),
            );
        }
    }
    Ok(templates)
}

/// Crosses the service's templates with its matching nodes, template-major.
fn explode(service: GeoService, filter: &GeoFilter) -> RecordSetStream<'static> {
    let templates = match templates(&service, filter) {
        Ok(templates) => templates,
        Err(e) => return stream::once(future::ready(Err(e))).boxed(),
    };
    let fqdns: Arc<[String]> = service
        .nodes
        .into_iter()
        .filter(|node| filter.node(node))
        .map(|node| node.fqdn)
        .collect();
    log::debug!(
        "[{PROVIDER_ID}] Service {} yields {} templates x {} nodes",
        service.name,
        templates.len(),
        fqdns.len()
    );

    stream::iter(templates)
        .flat_map(move |template| {
            let fqdns = Arc::clone(&fqdns);
            let count = fqdns.len();
            stream::iter((0..count).map(move |i| template.clone().name(fqdns[i].as_str()).build()))
        })
        .boxed()
}

/// Geo record sets of one zone, derived from the account's geo services.
///
/// Services are fetched one at a time as the stream advances and dropped unless one of
/// their nodes matches, before any expansion happens.
pub struct DynEctGeoRecordSetApi {
    client: Arc<dyn GeoServiceClient>,
    zone: String,
}

impl DynEctGeoRecordSetApi {
    pub(crate) fn new(client: Arc<dyn GeoServiceClient>, zone: &str) -> Self {
        Self {
            client,
            zone: zone.to_string(),
        }
    }

    fn record_sets(&self, filter: GeoFilter) -> RecordSetStream<'static> {
        let client = self.client.clone();
        let ids = stream::once(async move { client.list_service_ids().await })
            .map_ok(|ids| stream::iter(ids.into_iter().map(Ok::<_, ProviderError>)))
            .try_flatten();

        let client = self.client.clone();
        let node_filter = filter.clone();
        ids.and_then(move |id| {
            let client = client.clone();
            async move { client.get_service(&id).await }
        })
        .try_filter(move |service| {
            future::ready(service.nodes.iter().any(|node| node_filter.node(node)))
        })
        .map_ok(move |service| explode(service, &filter))
        .try_flatten()
        .boxed()
    }
}

impl ReadOnlyRecordSetApi for DynEctGeoRecordSetApi {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        Ok(self.record_sets(GeoFilter::zone(&self.zone)))
    }

    fn list_by_name(&self, name: &str) -> Result<RecordSetStream<'_>> {
        require(PROVIDER_ID, "name", name)?;
        Ok(self.record_sets(GeoFilter {
            name: Some(name.to_string()),
            ..GeoFilter::zone(&self.zone)
        }))
    }

    fn list_by_name_and_type(
        &self,
        name: &str,
        record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        require(PROVIDER_ID, "name", name)?;
        require(PROVIDER_ID, "type", record_type)?;
        Ok(self.record_sets(GeoFilter {
            name: Some(name.to_string()),
            record_type: Some(record_type.to_string()),
            ..GeoFilter::zone(&self.zone)
        }))
    }
}

#[async_trait]
impl GeoRecordSetApi for DynEctGeoRecordSetApi {
    async fn get_by_name_type_and_group(
        &self,
        name: &str,
        record_type: &str,
        group: &str,
    ) -> Result<Option<RecordSet>> {
        require(PROVIDER_ID, "name", name)?;
        require(PROVIDER_ID, "type", record_type)?;
        require(PROVIDER_ID, "group", group)?;
        let mut matches = self.record_sets(GeoFilter {
            name: Some(name.to_string()),
            record_type: Some(record_type.to_string()),
            group: Some(group.to_string()),
            ..GeoFilter::zone(&self.zone)
        });
        matches.next().await.transpose()
    }
}
