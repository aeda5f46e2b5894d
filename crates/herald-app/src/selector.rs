//! Cell selection
//!
//! Routes a block to the pooled row type that renders it. This is the single
//! dispatch point between the content model and the visual layer: the feed
//! surface calls [`select_row`] for every position it materializes.

use crate::block::Block;
use crate::rows::{Row, RowPool, RowTag};

/// Select and bind the visual row for `block`.
///
/// Known variants acquire the row tagged with their variant name and bind a
/// clone of the block to it. [`Block::Unsupported`] acquires the base row
/// and leaves it unbound; the feed still occupies the position, so producers
/// ahead of this build degrade visibly instead of corrupting layout.
///
/// `position` is the 0-based feed index being materialized; it only feeds
/// the trace log.
///
/// # Panics
///
/// Panics if the pool has no registration for the selected tag (see
/// [`RowPool::acquire`]).
pub fn select_row(block: &Block, pool: &mut RowPool, position: usize) -> Row {
    let tag = match block {
        Block::Text { .. } => RowTag::Text,
        Block::Button { .. } => RowTag::Button,
        Block::DoubleButton { .. } => RowTag::DoubleButton,
        Block::Unsupported { kind, .. } => {
            tracing::debug!(position, kind = %kind, "unsupported block kind; using base row");
            RowTag::Base
        }
    };

    let mut row = pool.acquire(tag);
    if !matches!(block, Block::Unsupported { .. }) {
        row.bind(block.clone());
    }
    tracing::trace!(position, %tag, block = %block.id(), "row selected");
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::ButtonSpec;
    use proptest::prelude::*;

    fn sample_blocks() -> Vec<(Block, RowTag)> {
        vec![
            (Block::text("plain"), RowTag::Text),
            (
                Block::button("one", ButtonSpec::new("Ok", "ack")),
                RowTag::Button,
            ),
            (
                Block::double_button(
                    "two",
                    ButtonSpec::new("Yes", "accept"),
                    ButtonSpec::new("No", "decline"),
                ),
                RowTag::DoubleButton,
            ),
        ]
    }

    #[test]
    fn test_known_variants_bind_matching_rows() {
        let mut pool = RowPool::with_all_tags();
        for (position, (block, expected_tag)) in sample_blocks().into_iter().enumerate() {
            let row = select_row(&block, &mut pool, position);
            assert_eq!(row.tag(), expected_tag);
            assert_eq!(row.block(), Some(&block));
        }
    }

    #[test]
    fn test_unsupported_variant_gets_unbound_base_row() {
        let mut pool = RowPool::with_all_tags();
        let block = Block::unsupported("Video");
        let row = select_row(&block, &mut pool, 0);
        assert_eq!(row.tag(), RowTag::Base);
        assert!(row.block().is_none());
    }

    #[test]
    #[should_panic(expected = "no row registered")]
    fn test_unregistered_pool_is_fatal() {
        let mut pool = RowPool::new();
        let _ = select_row(&Block::text("boom"), &mut pool, 0);
    }

    proptest! {
        #[test]
        fn prop_selection_never_panics_on_full_pool(
            body in ".{0,80}",
            variant in 0usize..4,
        ) {
            let mut pool = RowPool::with_all_tags();
            let block = match variant {
                0 => Block::text(body.clone()),
                1 => Block::button(body.clone(), ButtonSpec::new("Ok", "ack")),
                2 => Block::double_button(
                    body.clone(),
                    ButtonSpec::new("Yes", "accept"),
                    ButtonSpec::new("No", "decline"),
                ),
                _ => Block::unsupported(body.clone()),
            };
            let row = select_row(&block, &mut pool, 0);
            let bound = row.block().is_some();
            prop_assert_eq!(bound, !matches!(block, Block::Unsupported { .. }));
        }
    }
}
