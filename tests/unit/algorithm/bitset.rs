//! Tests for `ObjectBitset` growth, membership and conversions

#[cfg(test)]
mod tests {
    use towergrid::algorithm::bitset::ObjectBitset;
    use towergrid::world::GridObjectId;

    // Verifies new ObjectBitset is empty with count 0
    // Verified by initializing bitset with all bits set to 1
    #[test]
    fn test_new_bitset() {
        let bitset = ObjectBitset::with_capacity(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert!(ObjectBitset::new().is_empty());
    }

    // Tests insertion grows the set past its initial capacity
    // Verified by removing the resize in insert
    #[test]
    fn test_insert_grows() {
        let mut bitset = ObjectBitset::with_capacity(2);
        bitset.insert(GridObjectId::new(40));
        assert!(bitset.contains(GridObjectId::new(40)));
        assert!(!bitset.contains(GridObjectId::new(39)));
        assert!(!bitset.contains(GridObjectId::new(1_000)));
        assert_eq!(bitset.count(), 1);
    }

    // Tests clear removes all handles
    // Verified by making clear a no-op
    #[test]
    fn test_clear() {
        let mut bitset = ObjectBitset::new();
        bitset.insert(GridObjectId::new(3));
        bitset.insert(GridObjectId::new(5));
        bitset.clear();
        assert!(bitset.is_empty());
        assert!(!bitset.contains(GridObjectId::new(3)));
    }

    // Tests handles come back in ascending order
    // Verified by collecting zero bits instead of one bits
    #[test]
    fn test_to_vec_and_display() {
        let mut bitset = ObjectBitset::new();
        bitset.insert(GridObjectId::new(7));
        bitset.insert(GridObjectId::new(2));
        bitset.insert(GridObjectId::new(2));

        assert_eq!(
            bitset.to_vec(),
            vec![GridObjectId::new(2), GridObjectId::new(7)]
        );
        assert!(bitset.to_string().contains("2 objects"));
    }
}
