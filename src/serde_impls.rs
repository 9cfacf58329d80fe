#![cfg(feature = "serde")]
//! `serde` support: both containers serialize as plain sequences in logical
//! order, so a `RingBuffer` and a `Vec` with the same contents share one wire form.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::vecs::block_deque::BlockDeque;
use crate::vecs::ring_buffer::RingBuffer;

impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

impl<T: Serialize> Serialize for BlockDeque<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self)
    }
}

/// Builds any `Default + Extend` container from a sequence, pushing at the back.
struct SeqVisitor<C, T> {
    marker: PhantomData<fn() -> (C, T)>,
}

impl<'de, C, T> Visitor<'de> for SeqVisitor<C, T>
where
    C: Default + Extend<T>,
    T: Deserialize<'de>,
{
    type Value = C;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<C, A::Error> {
        let mut out = C::default();
        while let Some(item) = seq.next_element::<T>()? {
            out.extend(Some(item));
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for RingBuffer<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::<Self, T> {
            marker: PhantomData,
        })
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for BlockDeque<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(SeqVisitor::<Self, T> {
            marker: PhantomData,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_ring_buffer_round_trip_in_logical_order() {
        let mut ring = RingBuffer::with_capacity(4);
        ring.push_back(3);
        ring.push_back(4);
        ring.push_front(2);
        ring.push_front(1);
        let json = serde_json::to_string(&ring).unwrap();
        assert_eq!(json, "[1,2,3,4]");
        let back: RingBuffer<i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ring);
    }

    #[test]
    fn test_serde_block_deque_round_trip() {
        let deque: BlockDeque<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let json = serde_json::to_string(&deque).unwrap();
        assert_eq!(json, r#"["a","b","c"]"#);
        let back: BlockDeque<String> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, deque);
        assert!(serde_json::from_str::<BlockDeque<String>>("{}").is_err());
    }
}
