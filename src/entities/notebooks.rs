use crate::VehicleError;
use std::ops::{Index, IndexMut};

pub const NOTEBOOK_CAPACITY: usize = 1000;

/// Fixed-size shelf of notebook titles addressed by slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteBooks {
    slots: Vec<Option<String>>,
}

impl NoteBooks {
    pub fn new() -> Self {
        Self {
            slots: vec![None; NOTEBOOK_CAPACITY],
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, index: usize) -> Result<Option<&str>, VehicleError> {
        self.check(index)?;
        Ok(self.slots[index].as_deref())
    }

    pub fn set<S: Into<String>>(&mut self, index: usize, title: S) -> Result<(), VehicleError> {
        self.check(index)?;
        self.slots[index] = Some(title.into());
        Ok(())
    }

    /// Empties a slot, returning what it held.
    pub fn clear(&mut self, index: usize) -> Result<Option<String>, VehicleError> {
        self.check(index)?;
        Ok(self.slots[index].take())
    }

    /// Occupied slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|title| (i, title)))
    }

    fn check(&self, index: usize) -> Result<(), VehicleError> {
        if index >= self.slots.len() {
            return Err(VehicleError::IndexOutOfRange {
                index,
                capacity: self.slots.len(),
            });
        }
        Ok(())
    }
}

impl Default for NoteBooks {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for NoteBooks {
    type Output = Option<String>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.slots[index]
    }
}

impl IndexMut<usize> for NoteBooks {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.slots[index]
    }
}
