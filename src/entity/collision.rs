use crate::map::grid::Cell;

/// Trait for entities that occupy a cell and can therefore collide.
///
/// Two entities collide exactly when they share a cell.
pub trait Positioned {
    /// Returns the cell this entity currently occupies.
    fn cell(&self) -> Cell;

    fn occupies(&self, cell: Cell) -> bool {
        self.cell() == cell
    }

    fn is_colliding_with(&self, other: &dyn Positioned) -> bool {
        self.cell() == other.cell()
    }
}

/// Removes every entity standing on `cell`, returning how many were removed.
///
/// Random placement does not keep items apart, so more than one may share a cell.
pub fn remove_at<T: Positioned>(entities: &mut Vec<T>, cell: Cell) -> usize {
    let before = entities.len();
    entities.retain(|entity| !entity.occupies(cell));
    before - entities.len()
}
