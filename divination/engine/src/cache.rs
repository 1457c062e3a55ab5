//! # 起卦缓存
//!
//! 以起卦特征向量的 blake2_256 为键，同一身份只计算一次。
//! 超出容量时淘汰最早写入的条目。

use alloc::collections::VecDeque;
use sp_std::collections::btree_map::BTreeMap;

use stardust_iching::HexagramCast;

/// 缓存键
pub type CastKey = [u8; 32];

#[derive(Clone, Debug, Default)]
pub struct CastCache {
    entries: BTreeMap<CastKey, HexagramCast>,
    order: VecDeque<CastKey>,
}

impl CastCache {
    pub fn get(&self, key: &CastKey) -> Option<&HexagramCast> {
        self.entries.get(key)
    }

    /// 写入并按 `capacity` 淘汰，容量为 0 时不缓存
    pub fn insert(&mut self, key: CastKey, cast: HexagramCast, capacity: u32) {
        if capacity == 0 {
            return;
        }
        if self.entries.insert(key, cast).is_none() {
            self.order.push_back(key);
        }
        while self.order.len() > capacity as usize {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
                log::trace!("🔮 起卦缓存淘汰 {:?}", &oldest[..4]);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cast(primary: u8) -> HexagramCast {
        HexagramCast { primary, ..Default::default() }
    }

    #[test]
    fn test_insert_and_get() {
        let mut cache = CastCache::default();
        cache.insert([1; 32], cast(1), 4);
        assert_eq!(cache.get(&[1; 32]).map(|c| c.primary), Some(1));
        assert!(cache.get(&[2; 32]).is_none());
    }

    #[test]
    fn test_evicts_oldest() {
        let mut cache = CastCache::default();
        cache.insert([1; 32], cast(1), 2);
        cache.insert([2; 32], cast(2), 2);
        cache.insert([3; 32], cast(3), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&[1; 32]).is_none());
        assert!(cache.get(&[2; 32]).is_some());
        assert!(cache.get(&[3; 32]).is_some());
    }

    #[test]
    fn test_reinsert_keeps_order_slot() {
        let mut cache = CastCache::default();
        cache.insert([1; 32], cast(1), 2);
        cache.insert([1; 32], cast(1), 2);
        cache.insert([2; 32], cast(2), 2);
        assert_eq!(cache.len(), 2);
        assert!(cache.get(&[1; 32]).is_some());
    }

    #[test]
    fn test_zero_capacity() {
        let mut cache = CastCache::default();
        cache.insert([1; 32], cast(1), 0);
        assert!(cache.is_empty());
    }
}
