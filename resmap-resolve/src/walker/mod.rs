//! Depth-first traversal of a component source tree.
//!
//! The walker pulls one directory at a time: [`Walk`] is an iterator that
//! reads a directory only when every unit found so far has been consumed.
//! Entries are visited in byte-wise name order, so two walks over the same
//! tree always yield the same sequence.

mod context;
mod entry;

use std::{
    collections::{BTreeSet, VecDeque},
    fs,
    path::{Component, Path, PathBuf},
};

pub use context::{Scope, WalkContext};
pub use entry::{
    DiscoveredUnit, FileKind, IGNORE_SENTINEL, MARKUP_TYPE, SignalKind, TypeSignal,
    classify_file, is_ignored, module_path,
};
use indexmap::IndexMap;
use resmap_grammar::Grammar;

use crate::{Error, Result};

/// Configured entry point of a traversal.
///
/// # Example
///
/// ```ignore
/// let walker = Walker::new(&grammar, "app").base_dir("src");
/// for unit in walker.walk()? {
///     println!("{}", unit?.name);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Walker<'g> {
    grammar: &'g Grammar,
    root: PathBuf,
    base_dir: Option<PathBuf>,
}

impl<'g> Walker<'g> {
    pub fn new(grammar: &'g Grammar, root: impl Into<PathBuf>) -> Self {
        Self {
            grammar,
            root: root.into(),
            base_dir: None,
        }
    }

    /// Offset the scan root by a relative directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// The directory the walk actually starts in.
    pub fn scan_root(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => self.root.join(dir),
            None => self.root.clone(),
        }
    }

    /// Start the traversal.
    ///
    /// # Errors
    ///
    /// Fails with [`Error::RootUnreadable`] if the scan root cannot be read.
    pub fn walk(&self) -> Result<Walk<'g>> {
        let scan_root = self.scan_root();
        fs::read_dir(&scan_root).map_err(|source| Error::RootUnreadable {
            path: scan_root.clone(),
            source,
        })?;

        let base = self
            .base_dir
            .as_deref()
            .map(path_segments)
            .unwrap_or_default();

        Ok(Walk {
            grammar: self.grammar,
            stack: vec![Frame {
                dir: scan_root,
                ctx: WalkContext::root(base),
            }],
            ready: VecDeque::new(),
            unresolved: BTreeSet::new(),
        })
    }
}

fn path_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

#[derive(Debug)]
struct Frame {
    dir: PathBuf,
    ctx: WalkContext,
}

#[derive(Debug)]
struct Entry {
    name: String,
    path: PathBuf,
    is_dir: bool,
}

/// A lazy, depth-first stream of discovered units.
#[derive(Debug)]
pub struct Walk<'g> {
    grammar: &'g Grammar,
    stack: Vec<Frame>,
    ready: VecDeque<DiscoveredUnit>,
    unresolved: BTreeSet<String>,
}

impl Walk<'_> {
    /// Unresolvable collections the walk has entered so far.
    pub fn unresolved_collections(&self) -> &BTreeSet<String> {
        &self.unresolved
    }

    fn visit(&mut self, frame: Frame) -> Result<()> {
        let entries = read_sorted(&frame.dir)?;
        tracing::trace!(dir = %frame.dir.display(), scope = ?frame.ctx.scope(), "visiting");

        let mut children = Vec::new();
        match frame.ctx.scope() {
            Scope::Root => self.visit_root(&frame.ctx, entries, &mut children),
            Scope::Group(group) => self.visit_group(&frame.ctx, group, entries, &mut children),
            Scope::Collection | Scope::Unit(_) => {
                self.visit_members(&frame.ctx, entries, &mut children)
            }
        }

        // Reverse so the first child is popped first.
        self.stack.extend(children.into_iter().rev());
        Ok(())
    }

    fn visit_root(&mut self, ctx: &WalkContext, entries: Vec<Entry>, children: &mut Vec<Frame>) {
        for entry in entries.into_iter().filter(|e| e.is_dir) {
            if self.grammar.is_group(&entry.name) {
                children.push(Frame {
                    ctx: ctx.enter_group(&entry.name),
                    dir: entry.path,
                });
            } else if let Some(def) = self
                .grammar
                .collection(&entry.name)
                .filter(|def| def.group.is_none())
            {
                let ctx = ctx.enter_collection(&entry.name, def, false);
                self.note_collection(&entry.name, &ctx);
                children.push(Frame {
                    ctx,
                    dir: entry.path,
                });
            }
        }
    }

    fn visit_group(
        &mut self,
        ctx: &WalkContext,
        group: &str,
        entries: Vec<Entry>,
        children: &mut Vec<Frame>,
    ) {
        for entry in entries.into_iter().filter(|e| e.is_dir) {
            let Some(def) = self
                .grammar
                .collection(&entry.name)
                .filter(|def| def.group.as_deref() == Some(group))
            else {
                continue;
            };

            let ctx = ctx.enter_collection(&entry.name, def, false);
            self.note_collection(&entry.name, &ctx);
            children.push(Frame {
                ctx,
                dir: entry.path,
            });
        }
    }

    /// Visit a collection or unit directory.
    ///
    /// Inside a unit, files named after one of the collection's types are
    /// markers for the unit itself. Every other recognised file is a unit of
    /// its own, grouped by stem.
    fn visit_members(&mut self, ctx: &WalkContext, entries: Vec<Entry>, children: &mut Vec<Frame>) {
        let Some(collection) = ctx.collection() else {
            return;
        };
        let Some(def) = self.grammar.collection(collection) else {
            return;
        };

        let mut markers = Vec::new();
        let mut members: IndexMap<String, Vec<TypeSignal>> = IndexMap::new();

        for entry in entries {
            if entry.is_dir {
                let child = match self.grammar.collection(&entry.name) {
                    Some(nested) => {
                        let private = self.grammar.is_private(&entry.name, collection);
                        let child = ctx.enter_collection(&entry.name, nested, private);
                        self.note_collection(&entry.name, &child);
                        child
                    }
                    None => ctx.enter_unit(&entry.name),
                };
                children.push(Frame {
                    ctx: child,
                    dir: entry.path,
                });
                continue;
            }

            let Some((stem, kind)) = classify_file(&entry.name) else {
                tracing::trace!(file = %entry.name, "skipping unrecognised file");
                continue;
            };
            let module = module_path(ctx.dirs(), &entry.name, stem, kind);

            if matches!(ctx.scope(), Scope::Unit(_)) && def.has_type(stem) {
                markers.push(TypeSignal {
                    kind: SignalKind::Marker(stem.to_string()),
                    module,
                });
            } else {
                members.entry(stem.to_string()).or_default().push(TypeSignal {
                    kind: kind.into(),
                    module,
                });
            }
        }

        if let Scope::Unit(name) = ctx.scope() {
            if !markers.is_empty() {
                self.ready.push_back(DiscoveredUnit {
                    name: name.clone(),
                    collection: collection.to_string(),
                    group: ctx.group().map(str::to_string),
                    namespace: ctx.owner_namespace().to_vec(),
                    resolvable: ctx.is_resolvable(),
                    signals: markers,
                });
            }
        }

        for (name, signals) in members {
            self.ready.push_back(DiscoveredUnit {
                name,
                collection: collection.to_string(),
                group: ctx.group().map(str::to_string),
                namespace: ctx.namespace().to_vec(),
                resolvable: ctx.is_resolvable(),
                signals,
            });
        }
    }

    fn note_collection(&mut self, name: &str, ctx: &WalkContext) {
        if !ctx.is_resolvable() {
            self.unresolved.insert(name.to_string());
        }
    }
}

impl Iterator for Walk<'_> {
    type Item = Result<DiscoveredUnit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(unit) = self.ready.pop_front() {
                return Some(Ok(unit));
            }

            let frame = self.stack.pop()?;
            if let Err(err) = self.visit(frame) {
                self.stack.clear();
                return Some(Err(err));
            }
        }
    }
}

/// Read a directory, dropping ignored entries and sorting by name.
fn read_sorted(dir: &Path) -> Result<Vec<Entry>> {
    let read = fs::read_dir(dir).map_err(|e| Error::io(dir, e))?;

    let mut entries = Vec::new();
    for entry in read {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        let Ok(name) = entry.file_name().into_string() else {
            tracing::warn!(path = %entry.path().display(), "skipping non UTF-8 entry");
            continue;
        };
        if is_ignored(&name) {
            tracing::trace!(entry = %name, "ignored");
            continue;
        }

        let path = entry.path();
        let file_type = entry.file_type().map_err(|e| Error::io(&path, e))?;
        // Symlinked directories are skipped; symlinked files count as files.
        let is_dir = if file_type.is_symlink() {
            if path.is_dir() {
                tracing::debug!(path = %path.display(), "skipping symlinked directory");
                continue;
            }
            false
        } else {
            file_type.is_dir()
        };

        entries.push(Entry { name, path, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}
