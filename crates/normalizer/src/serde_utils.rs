use serde::ser::SerializeMap;
use serde::Serializer;

pub fn serialize_fields_as_map<S>(
    fields: &[(&'static str, String)],
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(fields.len()))?;
    for (k, v) in fields {
        map.serialize_entry(k, v)?;
    }
    map.end()
}
