/// Kind of material carried by a `KeyData`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyMaterialType {
    UnknownKeymaterial,
    Symmetric,
    AsymmetricPrivate,
    AsymmetricPublic,
    Remote,
}

/// Serialized key tagged with its type URL.
///
/// - `type_url`: selects the key manager (e.g. `key_type::KEY_TYPE`)
/// - `value`: the key record as produced by the serialization layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyData {
    pub type_url: String,
    pub value: Vec<u8>,
    pub key_material_type: KeyMaterialType,
}

impl KeyData {
    pub fn new(
        type_url: impl Into<String>,
        value: Vec<u8>,
        key_material_type: KeyMaterialType,
    ) -> Self {
        Self {
            type_url: type_url.into(),
            value,
            key_material_type,
        }
    }
}
