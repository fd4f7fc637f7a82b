//! Deterministic descriptor fingerprinting.
#![allow(clippy::cast_possible_truncation)]

use super::{Aggregate, OrderDirection, OrderKey, OrderSpec, PageSpec, QueryDescriptor};
use crate::predicate::{ComparePredicate, Predicate, Value};
use sha2::{Digest, Sha256};

///
/// DescriptorFingerprint
///
/// Stable SHA-256 digest of a [`QueryDescriptor`]; equal descriptors hash
/// equal, so callers can key result caches on it.
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct DescriptorFingerprint([u8; 32]);

impl DescriptorFingerprint {
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    #[must_use]
    pub fn as_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl std::fmt::Display for DescriptorFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.as_hex())
    }
}

impl QueryDescriptor {
    #[must_use]
    pub fn fingerprint(&self) -> DescriptorFingerprint {
        let mut hasher = Sha256::new();
        hasher.update(b"descfp:v1");

        write_tag(&mut hasher, 0x01);
        write_u32(&mut hasher, self.predicates.len() as u32);
        for predicate in &self.predicates {
            hash_predicate(&mut hasher, predicate);
        }

        write_tag(&mut hasher, 0x02);
        hash_order(&mut hasher, &self.order);

        write_tag(&mut hasher, 0x03);
        hash_page(&mut hasher, self.page);

        write_tag(&mut hasher, 0x04);
        write_u32(&mut hasher, self.color_filter_ids.len() as u32);
        for id in &self.color_filter_ids {
            write_str(&mut hasher, id);
        }

        let digest = hasher.finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        DescriptorFingerprint(out)
    }
}

fn hash_predicate(hasher: &mut Sha256, predicate: &Predicate) {
    match predicate {
        Predicate::And(children) => {
            write_tag(hasher, 0x20);
            write_u32(hasher, children.len() as u32);
            for child in children {
                hash_predicate(hasher, child);
            }
        }
        Predicate::Or(children) => {
            write_tag(hasher, 0x21);
            write_u32(hasher, children.len() as u32);
            for child in children {
                hash_predicate(hasher, child);
            }
        }
        Predicate::Compare(ComparePredicate { field, op, value }) => {
            write_tag(hasher, 0x22);
            write_str(hasher, field);
            write_tag(hasher, op.tag());
            write_value(hasher, value);
        }
        Predicate::TextMatchCi { field, pattern } => {
            write_tag(hasher, 0x23);
            write_str(hasher, field);
            write_str(hasher, pattern);
        }
        Predicate::Exists {
            relation,
            predicate,
        } => {
            write_tag(hasher, 0x24);
            write_str(hasher, relation);
            hash_predicate(hasher, predicate);
        }
    }
}

fn hash_order(hasher: &mut Sha256, order: &OrderSpec) {
    write_u32(hasher, order.fields.len() as u32);
    for (key, direction) in &order.fields {
        match key {
            OrderKey::Field(field) => {
                write_tag(hasher, 0x30);
                write_str(hasher, field);
            }
            OrderKey::Aggregate {
                func,
                relation,
                field,
            } => {
                write_tag(hasher, 0x31);
                write_tag(hasher, aggregate_tag(*func));
                write_str(hasher, relation);
                write_str(hasher, field);
            }
        }
        write_tag(hasher, order_direction_tag(*direction));
    }
}

fn hash_page(hasher: &mut Sha256, page: PageSpec) {
    write_u32(hasher, page.limit);
    write_u32(hasher, page.offset);
}

fn write_value(hasher: &mut Sha256, value: &Value) {
    match value {
        Value::Bool(b) => {
            write_tag(hasher, 0x10);
            write_tag(hasher, u8::from(*b));
        }
        Value::Number(n) => {
            write_tag(hasher, 0x11);
            // -0.0 hashes as 0.0
            let n = if *n == 0.0 { 0.0_f64 } else { *n };
            hasher.update(n.to_bits().to_be_bytes());
        }
        Value::Text(text) => {
            write_tag(hasher, 0x12);
            write_str(hasher, text);
        }
        Value::List(items) => {
            write_tag(hasher, 0x13);
            write_u32(hasher, items.len() as u32);
            for item in items {
                write_value(hasher, item);
            }
        }
    }
}

fn write_str(hasher: &mut Sha256, value: &str) {
    write_u32(hasher, value.len() as u32);
    hasher.update(value.as_bytes());
}

fn write_u32(hasher: &mut Sha256, value: u32) {
    hasher.update(value.to_be_bytes());
}

fn write_tag(hasher: &mut Sha256, tag: u8) {
    hasher.update([tag]);
}

const fn aggregate_tag(func: Aggregate) -> u8 {
    match func {
        Aggregate::Min => 0x01,
        Aggregate::Max => 0x02,
    }
}

const fn order_direction_tag(direction: OrderDirection) -> u8 {
    match direction {
        OrderDirection::Asc => 0x01,
        OrderDirection::Desc => 0x02,
    }
}
