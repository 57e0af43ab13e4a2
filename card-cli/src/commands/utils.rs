use std::path::PathBuf;

use data_profile::Profile;
use url::Url;

use crate::error::AppError;

pub fn load_profile(path: &Option<PathBuf>) -> Result<Profile, AppError> {
    let path = path.as_ref().ok_or_else(|| {
        AppError::ProfileLoadError("Profile file was not provided".to_owned())
    })?;
    let text = std::fs::read_to_string(path)
        .map_err(|e| AppError::ProfileLoadError(e.to_string()))?;
    Profile::from_json(&text)
        .map_err(|e| AppError::ProfileLoadError(e.to_string()))
}

pub fn parse_url(url: &Option<String>) -> Result<Url, AppError> {
    let url = url.as_ref().ok_or_else(|| {
        AppError::ShareUrlError("URL was not provided".to_owned())
    })?;
    Url::parse(url).map_err(|e| AppError::ShareUrlError(e.to_string()))
}
