//! Pure reorder helper backing drag-and-drop.

/// Moves the element identified by `active_id` to the position of the
/// element identified by `over_id`, shifting the elements in between.
///
/// This is a single-element move-and-shift, not a swap: the element is
/// removed at its source index and reinserted at the destination index.
/// When either id is absent (a stale drag reference) or both ids are equal,
/// the list is left untouched.
///
/// Returns true when the list changed.
pub fn move_by_id<T, F>(items: &mut Vec<T>, active_id: &str, over_id: &str, id_of: F) -> bool
where
    F: Fn(&T) -> &str,
{
    if active_id == over_id {
        return false;
    }
    let Some(from) = items.iter().position(|item| id_of(item) == active_id) else {
        return false;
    };
    let Some(to) = items.iter().position(|item| id_of(item) == over_id) else {
        return false;
    };
    let item = items.remove(from);
    items.insert(to, item);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn move_forward_shifts_intervening_elements() {
        let mut items = ids(&["t1", "t2", "t3"]);
        assert!(move_by_id(&mut items, "t1", "t3", String::as_str));
        assert_eq!(items, ids(&["t2", "t3", "t1"]));
    }

    #[test]
    fn move_backward_shifts_intervening_elements() {
        let mut items = ids(&["t1", "t2", "t3", "t4"]);
        move_by_id(&mut items, "t4", "t2", String::as_str);
        assert_eq!(items, ids(&["t1", "t4", "t2", "t3"]));
    }

    #[test]
    fn inverse_move_restores_order_of_adjacent_pair() {
        // Drag gestures report one position step at a time, so the undo
        // gesture is the adjacent inverse move.
        let original = ids(&["t1", "t2", "t3", "t4"]);
        let mut items = original.clone();
        move_by_id(&mut items, "t2", "t3", String::as_str);
        assert_eq!(items, ids(&["t1", "t3", "t2", "t4"]));
        move_by_id(&mut items, "t3", "t2", String::as_str);
        assert_eq!(items, original);
    }

    #[test]
    fn stale_or_equal_ids_are_a_no_op() {
        let original = ids(&["t1", "t2", "t3"]);

        let mut items = original.clone();
        assert!(!move_by_id(&mut items, "missing", "t2", String::as_str));
        assert_eq!(items, original);

        let mut items = original.clone();
        assert!(!move_by_id(&mut items, "t2", "missing", String::as_str));
        assert_eq!(items, original);

        let mut items = original.clone();
        assert!(!move_by_id(&mut items, "t2", "t2", String::as_str));
        assert_eq!(items, original);
    }
}
