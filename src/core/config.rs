use crate::config::Config;
use crate::core::endpoint::normalize_base_url;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn render(cfg: &Config) -> AppResult<String> {
        serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Open `path` in the requested editor, falling back to $EDITOR/$VISUAL
    /// and then to the platform default. Returns the editor that succeeded.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let requested = editor.clone().unwrap_or_else(|| default_editor.clone());

        let mut candidates = vec![&requested];
        if default_editor != requested {
            candidates.push(&default_editor);
        }

        for candidate in candidates {
            match Command::new(candidate).arg(path).status() {
                Ok(s) if s.success() => return Ok(candidate.clone()),
                Ok(s) => tracing::debug!(editor = %candidate, status = ?s.code(), "editor exited with failure"),
                Err(e) => tracing::debug!(editor = %candidate, error = %e, "editor not available"),
            }
        }

        Err(AppError::Config(format!(
            "failed to edit {} with '{}' or '{}'",
            path.display(),
            requested,
            default_editor
        )))
    }

    /// Store a new backend URL in the configuration.
    /// Empty input is rejected and leaves the configuration untouched.
    pub fn set_server(cfg: &mut Config, url: &str, is_test: bool) -> AppResult<String> {
        let normalized =
            normalize_base_url(url).ok_or_else(|| AppError::InvalidServerUrl(url.to_string()))?;

        cfg.server_url = normalized.clone();
        if !is_test {
            cfg.save()?;
        }
        Ok(normalized)
    }
}
