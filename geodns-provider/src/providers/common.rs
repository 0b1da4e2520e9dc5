//! Provider 公共工具函数

use std::sync::Arc;

use async_trait::async_trait;
use futures::stream::{self, StreamExt};

use crate::error::{ProviderError, Result};
use crate::model::{RecordData, RecordSet};
use crate::traits::{ReadOnlyRecordSetApi, RecordSetApi, RecordSetApiFactory};
use crate::types::RecordSetStream;

// ============ Rdata 解析 ============

fn parse_error(provider: &str, detail: String) -> ProviderError {
    ProviderError::ParseError {
        provider: provider.to_string(),
        detail,
    }
}

fn number<T: std::str::FromStr>(field: &str, record_type: &str, provider: &str) -> Result<T> {
    field.parse().map_err(|_| {
        parse_error(
            provider,
            format!("{record_type} rdata field '{field}' is not a valid number"),
        )
    })
}

fn arity<'a, S: AsRef<str>, const N: usize>(
    fields: &'a [S],
    record_type: &str,
    provider: &str,
) -> Result<[&'a str; N]> {
    let values: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
    values.try_into().map_err(|values: Vec<&str>| {
        parse_error(
            provider,
            format!(
                "{record_type} rdata expects {N} fields, got {}",
                values.len()
            ),
        )
    })
}

/// 将厂商返回的 rdata 字段列表转换为 [`RecordData`]
///
/// TXT 的多个字段以空格拼接；其余类型要求字段数量与类型完全一致。
pub fn parse_rdata<S: AsRef<str>>(
    record_type: &str,
    fields: &[S],
    provider: &str,
) -> Result<RecordData> {
    let data = match record_type.to_uppercase().as_str() {
        "A" => {
            let [address] = arity(fields, record_type, provider)?;
            RecordData::A {
                address: address.to_string(),
            }
        }
        "AAAA" => {
            let [address] = arity(fields, record_type, provider)?;
            RecordData::AAAA {
                address: address.to_string(),
            }
        }
        "CNAME" => {
            let [target] = arity(fields, record_type, provider)?;
            RecordData::CNAME {
                target: target.to_string(),
            }
        }
        "NS" => {
            let [nameserver] = arity(fields, record_type, provider)?;
            RecordData::NS {
                nameserver: nameserver.to_string(),
            }
        }
        "MX" => {
            let [priority, exchange] = arity(fields, record_type, provider)?;
            RecordData::MX {
                priority: number(priority, record_type, provider)?,
                exchange: exchange.to_string(),
            }
        }
        "TXT" => {
            let parts: Vec<&str> = fields.iter().map(|f| f.as_ref()).collect();
            RecordData::TXT {
                text: parts.join(" "),
            }
        }
        "SRV" => {
            let [priority, weight, port, target] = arity(fields, record_type, provider)?;
            RecordData::SRV {
                priority: number(priority, record_type, provider)?,
                weight: number(weight, record_type, provider)?,
                port: number(port, record_type, provider)?,
                target: target.to_string(),
            }
        }
        "CAA" => {
            let [flags, tag, value] = arity(fields, record_type, provider)?;
            RecordData::CAA {
                flags: number(flags, record_type, provider)?,
                tag: tag.to_string(),
                value: value.trim_matches('"').to_string(),
            }
        }
        "SOA" => {
            let [mname, rname, serial, refresh, retry, expire, minimum] =
                arity(fields, record_type, provider)?;
            RecordData::SOA {
                mname: mname.to_string(),
                rname: rname.to_string(),
                serial: number(serial, record_type, provider)?,
                refresh: number(refresh, record_type, provider)?,
                retry: number(retry, record_type, provider)?,
                expire: number(expire, record_type, provider)?,
                minimum: number(minimum, record_type, provider)?,
            }
        }
        _ => {
            return Err(parse_error(
                provider,
                format!("不支持的记录类型: {record_type}"),
            ));
        }
    };
    Ok(data)
}

/// 将一行 presentation 格式的 rdata（如 `"10 mail.example.com."`）转换为 [`RecordData`]
pub fn parse_rdata_text(record_type: &str, text: &str, provider: &str) -> Result<RecordData> {
    if record_type.eq_ignore_ascii_case("TXT") {
        return parse_rdata(record_type, &[text], provider);
    }
    let fields: Vec<&str> = text.split_whitespace().collect();
    parse_rdata(record_type, fields.as_slice(), provider)
}

// ============ 域名名称处理 ============

/// 去掉域名末尾的点
pub fn normalize_domain_name(name: &str) -> &str {
    name.trim_end_matches('.')
}

/// 忽略末尾的点与大小写比较两个域名
pub fn same_name(a: &str, b: &str) -> bool {
    normalize_domain_name(a).eq_ignore_ascii_case(normalize_domain_name(b))
}

// ============ 空的普通记录来源 ============

/// Plain side of a provider configured without non-geo record access.
///
/// Lists nothing and finds nothing, for every zone.
pub(crate) struct NoPlainRecords;

impl ReadOnlyRecordSetApi for NoPlainRecords {
    fn list(&self) -> Result<RecordSetStream<'_>> {
        Ok(stream::empty().boxed())
    }

    fn list_by_name(&self, _name: &str) -> Result<RecordSetStream<'_>> {
        Ok(stream::empty().boxed())
    }

    fn list_by_name_and_type(
        &self,
        _name: &str,
        _record_type: &str,
    ) -> Result<RecordSetStream<'_>> {
        Ok(stream::empty().boxed())
    }
}

#[async_trait]
impl RecordSetApi for NoPlainRecords {
    async fn get_by_name_and_type(
        &self,
        _name: &str,
        _record_type: &str,
    ) -> Result<Option<RecordSet>> {
        Ok(None)
    }
}

#[async_trait]
impl RecordSetApiFactory for NoPlainRecords {
    async fn create(&self, _zone: &str) -> Result<Arc<dyn RecordSetApi>> {
        Ok(Arc::new(Self))
    }
}
