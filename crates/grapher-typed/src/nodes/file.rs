//! Audio file playback.

use grapher_core::Time;

use crate::plugin_node;

plugin_node! {
    /// Plays a span of an audio file.
    ///
    /// `file` has no default: documents without it fail to load, and
    /// [`FileNode::create`] refuses a config without it.
    pub struct FileNode {
        kind: "com.nativeformat.plugin.file.file",
        config: FileConfig {
            /// Location of the file, as understood by the engine.
            file: String => "file",
            /// Start of playback on the graph timeline.
            when: Time => "when" = Time::ZERO,
            /// Length of playback; zero means the rest of the file.
            duration: Time => "duration" = Time::ZERO,
            /// Position in the file where playback starts.
            offset: Time => "offset" = Time::ZERO,
        },
        params {},
        inputs: [],
        outputs: ["audio": Audio],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{MappingError, Plugin, TypedNode};
    use grapher_core::Node;

    #[test]
    fn file_is_required() {
        assert_eq!(
            FileNode::create(FileConfig::default()),
            Err(MappingError::MissingRequiredArgument("file".to_string()))
        );
        let node = Node::new("f", FileNode::KIND).with_config("when", 0);
        assert_eq!(
            FileNode::from_node(&node),
            Err(MappingError::MissingRequiredArgument("file".to_string()))
        );
    }

    #[test]
    fn times_default_to_zero() {
        let file = FileNode::create(FileConfig::default().file("a.ogg".to_string())).unwrap();
        assert_eq!(file.file(), "a.ogg");
        assert_eq!(*file.when(), Time::ZERO);
        assert_eq!(*file.offset(), Time::ZERO);
        assert!(file.params().is_empty());
    }
}
