use crate::{Lanes, TileWidth, Transform, TransformTiles};
use core::iter::{DoubleEndedIterator, ExactSizeIterator, FusedIterator};

/// An iterator over copies of the transforms in a [`TransformTiles`], in entity order.
///
/// See [`TransformTiles::iter`].
pub struct TilesIter<'a, const N: usize>
where
    Lanes<N>: TileWidth,
{
    tiles: &'a TransformTiles<N>,
    front: usize,
    back: usize,
}

impl<'a, const N: usize> TilesIter<'a, N>
where
    Lanes<N>: TileWidth,
{
    pub(crate) fn new(tiles: &'a TransformTiles<N>) -> Self {
        Self {
            tiles,
            front: 0,
            back: tiles.len(),
        }
    }
}

impl<'a, const N: usize> Iterator for TilesIter<'a, N>
where
    Lanes<N>: TileWidth,
{
    type Item = Transform;
    fn next(&mut self) -> Option<Transform> {
        if self.front == self.back {
            return None;
        }
        let output = self.tiles.get(self.front);
        self.front += 1;
        output
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }

    fn nth(&mut self, n: usize) -> Option<Transform> {
        self.front = self.front.saturating_add(n).min(self.back);
        self.next()
    }
}

impl<'a, const N: usize> ExactSizeIterator for TilesIter<'a, N> where Lanes<N>: TileWidth {}

impl<'a, const N: usize> FusedIterator for TilesIter<'a, N> where Lanes<N>: TileWidth {}

impl<'a, const N: usize> DoubleEndedIterator for TilesIter<'a, N>
where
    Lanes<N>: TileWidth,
{
    fn next_back(&mut self) -> Option<Transform> {
        if self.front == self.back {
            return None;
        }
        self.back -= 1;
        self.tiles.get(self.back)
    }
}

#[cfg(test)]
mod test {
    use crate::{Transform, TransformTiles, Vec2};
    use alloc::vec::Vec;

    fn numbered(count: usize) -> TransformTiles<4> {
        let transforms: Vec<_> = (0..count)
            .map(|i| Transform {
                position: Vec2::new(i as f32, 0.0),
                ..Transform::default()
            })
            .collect();
        TransformTiles::from_transforms(&transforms).unwrap()
    }

    fn index_of(transform: Option<Transform>) -> Option<usize> {
        transform.map(|transform| transform.position.x as usize)
    }

    #[test]
    fn test_iter_in_entity_order() {
        let tiles = numbered(12);
        let order: Vec<_> = tiles.iter().map(|t| t.position.x as usize).collect();
        assert_eq!(order, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_iter_size_hint() {
        let tiles = numbered(8);
        let mut iter = tiles.iter();
        assert_eq!(iter.len(), 8);
        iter.next();
        iter.next_back();
        assert_eq!(iter.size_hint(), (6, Some(6)));
    }

    #[test]
    fn test_iter_double_ended() {
        let tiles = numbered(4);
        let mut iter = tiles.iter();
        assert_eq!(index_of(iter.next()), Some(0));
        assert_eq!(index_of(iter.next_back()), Some(3));
        assert_eq!(index_of(iter.next_back()), Some(2));
        assert_eq!(index_of(iter.next()), Some(1));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn test_iter_nth() {
        let tiles = numbered(8);
        let mut iter = tiles.iter();
        assert_eq!(index_of(iter.nth(5)), Some(5));
        assert_eq!(index_of(iter.next()), Some(6));
        assert_eq!(iter.nth(4), None);
        assert_eq!(iter.next(), None);
    }
}
