use crate::{
    Lanes, TileWidth, Transform, TransformAos, TransformSoa, TransformTiles, TransformVec2Soa,
};
use alloc::vec::Vec;
use serde::{de::Error, ser::SerializeSeq, Deserialize, Deserializer, Serialize, Serializer};

fn serialize_transforms<S, I>(serializer: S, len: usize, transforms: I) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    I: IntoIterator<Item = Transform>,
{
    let mut seq = serializer.serialize_seq(Some(len))?;
    for transform in transforms {
        seq.serialize_element(&transform)?;
    }
    seq.end()
}

impl<const N: usize> Serialize for TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_transforms(serializer, self.len(), self.iter())
    }
}

impl<'de, const N: usize> Deserialize<'de> for TransformTiles<N>
where
    Lanes<N>: TileWidth,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let transforms = <Vec<Transform> as Deserialize<'de>>::deserialize(deserializer)?;
        Self::from_transforms(&transforms).map_err(D::Error::custom)
    }
}

impl Serialize for TransformAos {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_transforms(serializer, self.len(), self.iter().copied())
    }
}

impl<'de> Deserialize<'de> for TransformAos {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(Self::from(<Vec<Transform> as Deserialize<'de>>::deserialize(
            deserializer,
        )?))
    }
}

macro_rules! impl_serde_columns {
    ($($layout:ident),*) => {
        $(
            impl Serialize for $layout {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serialize_transforms(serializer, self.len(), self.iter())
                }
            }

            impl<'de> Deserialize<'de> for $layout {
                fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
                where
                    D: Deserializer<'de>,
                {
                    let transforms =
                        <Vec<Transform> as Deserialize<'de>>::deserialize(deserializer)?;
                    Self::from_transforms(&transforms).map_err(D::Error::custom)
                }
            }
        )*
    };
}

impl_serde_columns!(TransformSoa, TransformVec2Soa);
