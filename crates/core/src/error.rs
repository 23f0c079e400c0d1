use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error {} {} file at `{}`: {}", .action, .file_description, .path, .original)]
    Yaml {
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    },

    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Terminal error: {}", .0)]
    Terminal(#[from] std::io::Error),

    #[error("Bookmark does not exist: `{}`", .0)]
    BookmarkNotFound(String),

    #[error("Invalid bookmark name: name may not be empty")]
    EmptyName,

    #[error("Invalid bookmark name `{}`: name may not contain whitespace", .0)]
    NameWithWhitespace(String),

    #[error("Invalid bookmark `{}`: command may not be empty", .0)]
    EmptyCommand(String),

    #[error("Blasting blast is not sane, refusing to bookmark `{}`", .0)]
    RecursiveBookmark(String),
}

impl Error {
    pub fn yaml_error(
        action: String,
        file_description: String,
        path: String,
        original: serde_yaml::Error,
    ) -> Self {
        Self::Yaml {
            action,
            file_description,
            path,
            original,
        }
    }

    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }
}
