//! Passenger lookup and circular navigation over one locale's sequence.

use crate::catalog::{LocaleCatalog, LocaleCode, Passenger};

/// Read-only view over the passengers of a single locale.
#[derive(Debug, Clone, Copy)]
pub struct ProfileDirectory<'a> {
    passengers: &'a [Passenger],
}

/// The passengers reachable from the current one in a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Neighbours<'a> {
    pub previous_id: u32,
    pub next_id: u32,
    pub previous: Option<&'a Passenger>,
    pub next: Option<&'a Passenger>,
}

impl<'a> ProfileDirectory<'a> {
    pub fn new(passengers: &'a [Passenger]) -> Self {
        Self { passengers }
    }

    /// Directory for `locale`, or `None` when the catalog does not carry it.
    pub fn for_locale(catalog: &'a LocaleCatalog, locale: &LocaleCode) -> Option<Self> {
        catalog.passengers(locale).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.passengers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passengers.is_empty()
    }

    pub fn passengers(&self) -> &'a [Passenger] {
        self.passengers
    }

    /// Linear scan for the passenger carrying `id`.
    pub fn find_by_id(&self, id: u32) -> Option<&'a Passenger> {
        self.passengers.iter().find(|p| p.id == id)
    }

    /// Cyclic successor of `current`; `None` for an empty sequence.
    pub fn next_id(&self, current: u32) -> Option<u32> {
        let len = self.len_u32()?;
        Some(if current < len { current + 1 } else { 1 })
    }

    /// Cyclic predecessor of `current`; `None` for an empty sequence.
    pub fn previous_id(&self, current: u32) -> Option<u32> {
        let len = self.len_u32()?;
        Some(if current > 1 { current - 1 } else { len })
    }

    /// Both adjacent identifiers along with the records they resolve to.
    pub fn neighbours(&self, current: u32) -> Option<Neighbours<'a>> {
        let previous_id = self.previous_id(current)?;
        let next_id = self.next_id(current)?;
        Some(Neighbours {
            previous_id,
            next_id,
            previous: self.find_by_id(previous_id),
            next: self.find_by_id(next_id),
        })
    }

    fn len_u32(&self) -> Option<u32> {
        match self.passengers.len() {
            0 => None,
            len => u32::try_from(len).ok(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five() -> Vec<Passenger> {
        // Stored out of order on purpose: position is not the identifier.
        [4, 2, 5, 1, 3]
            .into_iter()
            .map(|id| {
                Passenger::new(id, format!("Name {id}"))
                    .with_role(format!("Role {id}"))
                    .with_bio(format!("Bio {id}"))
            })
            .collect()
    }

    #[test]
    fn finds_every_valid_identifier() {
        let list = five();
        let dir = ProfileDirectory::new(&list);
        for id in 1..=5 {
            assert_eq!(dir.find_by_id(id).map(|p| p.id), Some(id));
        }
        let third = dir.find_by_id(3).unwrap();
        assert_eq!(third.name, "Name 3");
        assert_eq!(third.role, "Role 3");
        assert_eq!(third.bio, "Bio 3");
    }

    #[test]
    fn out_of_range_identifiers_are_not_found() {
        let list = five();
        let dir = ProfileDirectory::new(&list);
        assert!(dir.find_by_id(0).is_none());
        assert!(dir.find_by_id(6).is_none());
        assert!(dir.find_by_id(99).is_none());
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let list = five();
        let dir = ProfileDirectory::new(&list);
        assert_eq!(dir.next_id(5), Some(1));
        assert_eq!(dir.previous_id(1), Some(5));
        assert_eq!(dir.next_id(2), Some(3));
        assert_eq!(dir.previous_id(4), Some(3));
    }

    #[test]
    fn previous_inverts_next_over_the_whole_cycle() {
        let list = five();
        let dir = ProfileDirectory::new(&list);
        let mut visited = Vec::new();
        for id in 1..=5 {
            let next = dir.next_id(id).unwrap();
            assert!((1..=5).contains(&next));
            assert_eq!(dir.previous_id(next), Some(id));
            visited.push(next);
        }
        visited.sort_unstable();
        assert_eq!(visited, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn single_passenger_is_its_own_neighbour() {
        let list = vec![Passenger::new(1, "Solo")];
        let dir = ProfileDirectory::new(&list);
        let n = dir.neighbours(1).unwrap();
        assert_eq!((n.previous_id, n.next_id), (1, 1));
        assert_eq!(n.next.map(|p| p.name.as_str()), Some("Solo"));
    }

    #[test]
    fn empty_sequence_has_no_navigation() {
        let dir = ProfileDirectory::new(&[]);
        assert!(dir.is_empty());
        assert_eq!(dir.next_id(1), None);
        assert_eq!(dir.previous_id(1), None);
        assert!(dir.neighbours(1).is_none());
        assert!(dir.find_by_id(1).is_none());
    }
}
