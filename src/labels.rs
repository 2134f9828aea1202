//! Label bitmask helpers
//!
//! A card stores its labels as a bitmask over the board's label slots;
//! slot i corresponds to bit i.

use crate::models::{Card, Label};

/// Number of label slots a board can address.
pub const MAX_LABELS: usize = 32;

pub fn has_label(mask: u32, index: u8) -> bool {
    (index as usize) < MAX_LABELS && mask & (1 << index) != 0
}

pub fn with_label(mask: u32, index: u8, on: bool) -> u32 {
    if (index as usize) >= MAX_LABELS {
        return mask;
    }
    if on {
        mask | (1 << index)
    } else {
        mask & !(1 << index)
    }
}

/// Labels to render for a card, in slot order. Deleted slots are skipped
/// even if stale data still carries their bit.
pub fn visible_labels<'a>(mask: u32, labels: &'a [Label]) -> Vec<&'a Label> {
    labels
        .iter()
        .filter(|l| !l.is_deleted() && has_label(mask, l.index))
        .collect()
}

/// Board-wide cleanup when a label slot is deleted.
pub fn clear_label_everywhere(cards: &mut [Card], index: u8) {
    for card in cards.iter_mut() {
        card.label_mask = with_label(card.label_mask, index, false);
    }
}

/// Mark a slot deleted in place (empty name and color); the index stays
/// reserved so the remaining bits keep their meaning.
pub fn mark_slot_deleted(labels: &mut [Label], index: u8) {
    for label in labels.iter_mut() {
        if label.index == index {
            label.name.clear();
            label.color.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn label(index: u8, name: &str, color: &str) -> Label {
        Label { index, name: name.to_string(), color: color.to_string() }
    }

    fn card(id: u32, mask: u32) -> Card {
        Card {
            id,
            cardlist_id: 1,
            prev_card_id: 0,
            title: format!("card {id}"),
            content: String::new(),
            label_mask: mask,
            locked: false,
            cover_image: None,
        }
    }

    #[test]
    fn mask_bit_round_trip() {
        let mask = with_label(0, 2, true);
        assert!(has_label(mask, 2));
        assert!(!has_label(mask, 1));
        assert_eq!(with_label(mask, 2, false), 0);
    }

    #[test]
    fn out_of_range_index_is_inert() {
        assert_eq!(with_label(0b101, 32, true), 0b101);
        assert!(!has_label(u32::MAX, 32));
    }

    #[test]
    fn deleted_slots_are_skipped_even_with_stale_bits() {
        let labels = vec![label(0, "bug", "#e74c3c"), label(1, "", ""), label(2, "ops", "#3498db")];
        let visible = visible_labels(0b111, &labels);
        let indices: Vec<u8> = visible.iter().map(|l| l.index).collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn delete_label_clears_bit_on_every_card() {
        let mut cards = vec![card(1, 0b100), card(2, 0b101), card(3, 0b010)];
        clear_label_everywhere(&mut cards, 2);
        assert_eq!(cards[0].label_mask, 0);
        assert_eq!(cards[1].label_mask, 0b001);
        assert_eq!(cards[2].label_mask, 0b010);
    }

    #[test]
    fn deleted_slot_keeps_its_index() {
        let mut labels = vec![label(0, "bug", "#e74c3c"), label(1, "ops", "#3498db")];
        mark_slot_deleted(&mut labels, 1);
        assert!(labels[1].is_deleted());
        assert_eq!(labels[1].index, 1);
        assert!(!labels[0].is_deleted());
    }
}
