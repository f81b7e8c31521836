use serde::Deserialize;

#[derive(Deserialize)]
pub struct SectionParams {
    pub section_id: String,
}
