use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CreateResponse {
    #[serde(rename = "fileName")]
    pub file_name: String,
}

#[derive(Debug, Serialize)]
pub struct ListResponse {
    pub directory: String,
    #[serde(rename = "fileInfos")]
    pub file_infos: Vec<FileInfo>,
}

#[derive(Debug, Serialize)]
pub struct FileInfo {
    pub filename: String,
    pub filetype: String,
}
