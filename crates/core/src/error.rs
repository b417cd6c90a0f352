use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Error with sub process: {}", _0)]
    SubProcess(#[from] std::io::Error),

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

    #[error("No config file found in default locations: {}", .searched.join(", "))]
    NoConfigFound { searched: Vec<String> },

    #[error("No commands were found in the config file. Is `{}` empty?", .path)]
    EmptyCommandDefinition { path: String },

    #[error("Command #{} (`{}`) has an empty `cmd`", .0, .1)]
    EmptyCommandTemplate(usize, String),

    #[error("Could not determine the path of the cmdmark executable: {}", .0)]
    CurrentProgram(std::io::Error),

    #[error("Could not find the fuzzy finder `{}`: {}", .name, .reason)]
    FinderNotFound { name: String, reason: String },

    #[error("Failed to launch the fuzzy finder: {}", .0)]
    FinderLaunch(std::io::Error),

    #[error("The fuzzy finder exited with error code {}", .0)]
    FinderExit(i32),

    #[error("The fuzzy finder returned an invalid selection: `{}`", .0)]
    InvalidSelection(String),

    #[error("Command index not found: {}", .0)]
    CommandIndexOutOfRange(usize),

    #[error("No match and freeform input is not allowed.")]
    ValueRequired,
}

impl Error {
    pub fn empty_command_definition(path: String) -> Self {
        Self::EmptyCommandDefinition { path }
    }

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
