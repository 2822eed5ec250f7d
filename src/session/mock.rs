use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{RemoteSession, SessionError};
use crate::firmware::DirectoryEntry;

pub const MOCK_HOST: &str = "ftp.example.test";
const MOCK_MODIFY: &str = "20210615120000";

/// In-memory archive tree.
#[derive(Debug, Clone)]
pub enum MockNode {
    Dir(Vec<(String, MockNode)>),
    File { content: Vec<u8>, modify: String },
    /// Listed as a directory, but entering it is refused.
    Forbidden,
    /// Listed as a file without size; entering or retrieving it drops the
    /// connection.
    Disconnected,
}

impl MockNode {
    pub fn dir(children: Vec<(&str, MockNode)>) -> Self {
        MockNode::Dir(children.into_iter().map(|(name, node)| (name.to_string(), node)).collect())
    }

    pub fn file(size: usize) -> Self {
        Self::file_modified(size, MOCK_MODIFY)
    }

    pub fn file_modified(size: usize, modify: &str) -> Self {
        MockNode::File {
            content: vec![0x5a; size],
            modify: modify.to_string(),
        }
    }

    fn entry(&self, name: &str) -> DirectoryEntry {
        let mut facts = HashMap::new();
        match self {
            MockNode::Dir(_) | MockNode::Forbidden => {
                facts.insert("type".to_string(), "dir".to_string());
                facts.insert("modify".to_string(), MOCK_MODIFY.to_string());
            }
            MockNode::File { content, modify } => {
                facts.insert("type".to_string(), "file".to_string());
                facts.insert("size".to_string(), content.len().to_string());
                facts.insert("modify".to_string(), modify.clone());
            }
            MockNode::Disconnected => {
                facts.insert("type".to_string(), "file".to_string());
            }
        }
        DirectoryEntry::new(name, facts)
    }
}

/// Session over a [`MockNode`] tree that remembers what the crawler asked for.
#[derive(Debug)]
pub struct MockSession {
    root: MockNode,
    cwd: Vec<String>,
    navigation_rows: bool,
    /// Every argument passed to `change_directory`, successful or not.
    pub cwd_calls: Vec<String>,
    /// Names passed to `retrieve_binary`.
    pub retrieved: Vec<String>,
    pub closed: bool,
    /// Raised after every successful retrieve.
    interrupt_on_retrieve: Option<Arc<AtomicBool>>,
}

impl MockSession {
    /// Listings start with `.`, `..` and a header row, like the real archive.
    pub fn new(root: MockNode) -> Self {
        Self {
            root,
            cwd: Vec::new(),
            navigation_rows: true,
            cwd_calls: Vec::new(),
            retrieved: Vec::new(),
            closed: false,
            interrupt_on_retrieve: None,
        }
    }

    /// Set `flag` once a file has been retrieved, as a Ctrl-C arriving during
    /// the first download would.
    pub fn interrupt_after_retrieve(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt_on_retrieve = Some(flag);
        self
    }

    /// Listings contain only the tree's own children.
    pub fn without_navigation_rows(root: MockNode) -> Self {
        Self {
            navigation_rows: false,
            ..Self::new(root)
        }
    }

    fn node_at(&self, path: &[String]) -> Option<&MockNode> {
        path.iter().try_fold(&self.root, |node, name| match node {
            MockNode::Dir(children) => children.iter().find(|(n, _)| n == name).map(|(_, child)| child),
            _ => None,
        })
    }

    fn rejected(&self, what: &str) -> SessionError {
        SessionError::Rejected(format!("550 {what}: No such file or directory"))
    }

    fn disconnected(&self) -> SessionError {
        SessionError::Connection("421 Service not available, closing control connection".to_string())
    }
}

impl RemoteSession for MockSession {
    fn host(&self) -> &str {
        MOCK_HOST
    }

    fn change_directory(&mut self, path: &str) -> Result<(), SessionError> {
        self.cwd_calls.push(path.to_string());
        match path {
            "/" => self.cwd.clear(),
            ".." => {
                self.cwd.pop();
            }
            name => {
                let mut target = self.cwd.clone();
                target.push(name.to_string());
                match self.node_at(&target) {
                    Some(MockNode::Dir(_)) => {}
                    Some(MockNode::Disconnected) => return Err(self.disconnected()),
                    _ => return Err(self.rejected(name)),
                }
                self.cwd = target;
            }
        }
        Ok(())
    }

    fn list_directory(&mut self) -> Result<Vec<DirectoryEntry>, SessionError> {
        let Some(MockNode::Dir(children)) = self.node_at(&self.cwd) else {
            return Err(self.rejected("listing"));
        };

        let mut entries = Vec::new();
        if self.navigation_rows {
            let navigation = MockNode::Dir(Vec::new());
            entries.push(navigation.entry("."));
            entries.push(navigation.entry(".."));
            entries.push(navigation.entry("total"));
        }
        entries.extend(children.iter().map(|(name, node)| node.entry(name)));
        Ok(entries)
    }

    fn current_path(&mut self) -> Result<String, SessionError> {
        Ok(format!("/{}", self.cwd.join("/")))
    }

    fn retrieve_binary(&mut self, name: &str, sink: &mut dyn Write) -> Result<u64, SessionError> {
        self.retrieved.push(name.to_string());
        let mut path = self.cwd.clone();
        path.push(name.to_string());
        match self.node_at(&path) {
            Some(MockNode::File { content, .. }) => {
                let content = content.clone();
                sink.write_all(&content)?;
                if let Some(flag) = &self.interrupt_on_retrieve {
                    flag.store(true, Ordering::SeqCst);
                }
                Ok(content.len() as u64)
            }
            Some(MockNode::Disconnected) => Err(self.disconnected()),
            _ => Err(self.rejected(name)),
        }
    }

    fn close(&mut self) -> Result<(), SessionError> {
        self.closed = true;
        Ok(())
    }
}
