//! Per-type transcoding between answer text and hickory record data.

use cascade_dns_domain::{DomainError, RecordType};
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, PTR, TXT};
use hickory_proto::rr::{Name, RData};
use std::net::{Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// Preference given to an MX answer whose data carries none.
///
/// Answers are expected to read `"<preference> <exchange>"`; a bare exchange
/// is encoded as if it had been written `"10 <exchange>"`.
pub const DEFAULT_MX_PREFERENCE: u16 = 10;

/// Longest character-string a TXT record can carry.
const MAX_CHARACTER_STRING: usize = 255;

/// Renders record data as answer text, or `None` for types this server does
/// not serve.
pub fn answer_data(rdata: &RData) -> Option<String> {
    match rdata {
        RData::A(a) => Some(a.0.to_string()),
        RData::AAAA(aaaa) => Some(aaaa.0.to_string()),
        RData::CNAME(cname) => Some(target_text(&cname.0)),
        RData::NS(ns) => Some(target_text(&ns.0)),
        RData::PTR(ptr) => Some(target_text(&ptr.0)),
        RData::MX(mx) => Some(format!("{} {}", mx.preference(), target_text(mx.exchange()))),
        RData::TXT(txt) => Some(
            txt.txt_data()
                .iter()
                .map(|segment| String::from_utf8_lossy(segment))
                .collect(),
        ),
        _ => None,
    }
}

/// Parses answer text into record data of the given type.
pub fn to_rdata(record_type: RecordType, data: &str) -> Result<RData, DomainError> {
    match record_type {
        RecordType::A => parse_ipv4(data).map(|ip| RData::A(A(ip))),
        RecordType::AAAA => parse_ipv6(data).map(|ip| RData::AAAA(AAAA(ip))),
        RecordType::CNAME => parse_name(data).map(|name| RData::CNAME(CNAME(name))),
        RecordType::NS => parse_name(data).map(|name| RData::NS(NS(name))),
        RecordType::PTR => parse_name(data).map(|name| RData::PTR(PTR(name))),
        RecordType::MX => parse_mx(data),
        RecordType::TXT => Ok(RData::TXT(TXT::new(split_character_strings(data)))),
    }
}

/// Parses a domain name written with or without its trailing dot.
pub fn parse_name(text: &str) -> Result<Name, DomainError> {
    let trimmed = text.trim().trim_end_matches('.');
    if trimmed.is_empty() {
        return Err(DomainError::InvalidDomainName("empty name".to_string()));
    }
    Name::from_str(&format!("{}.", trimmed))
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", trimmed, e)))
}

fn target_text(name: &Name) -> String {
    name.to_ascii().trim_end_matches('.').to_string()
}

fn parse_ipv4(data: &str) -> Result<Ipv4Addr, DomainError> {
    data.trim()
        .parse()
        .map_err(|_| DomainError::InvalidRecordData(format!("'{}' is not an IPv4 address", data)))
}

fn parse_ipv6(data: &str) -> Result<Ipv6Addr, DomainError> {
    data.trim()
        .parse()
        .map_err(|_| DomainError::InvalidRecordData(format!("'{}' is not an IPv6 address", data)))
}

fn parse_mx(data: &str) -> Result<RData, DomainError> {
    let data = data.trim();
    let (preference, exchange) = match data.split_once(' ') {
        Some((preference, exchange)) => {
            let preference = preference.parse::<u16>().map_err(|_| {
                DomainError::InvalidRecordData(format!("invalid MX preference in '{}'", data))
            })?;
            (preference, exchange)
        }
        None => (DEFAULT_MX_PREFERENCE, data),
    };
    Ok(RData::MX(MX::new(preference, parse_name(exchange)?)))
}

fn split_character_strings(data: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    for ch in data.chars() {
        if current.len() + ch.len_utf8() > MAX_CHARACTER_STRING {
            segments.push(std::mem::take(&mut current));
        }
        current.push(ch);
    }
    segments.push(current);
    segments
}
