use poem_openapi::Tags;

#[derive(Debug, Tags)]
pub enum ApiTags {
    Analytics,
    Health,
    Scanner,
}
