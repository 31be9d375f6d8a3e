//! RON catalog loader

use crate::error::{Error, Result};
use dailydex_core::{Catalog, CreatureDef, CreatureId};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// On-disk catalog file: a list of creature definitions
#[derive(Debug, serde::Deserialize)]
struct CatalogFile {
    creatures: Vec<CreatureDef>,
}

/// Loader for RON catalog files
#[derive(Debug, Default)]
pub struct Loader {
    defs: Vec<CreatureDef>,
}

impl Loader {
    /// Create a new loader
    pub fn new() -> Self {
        Self::default()
    }

    /// Load creature definitions from a RON string
    pub fn load_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = ron::from_str(content)?;
        for def in file.creatures {
            if self.defs.iter().any(|d| d.id == def.id) {
                return Err(Error::DuplicateCreature(def.id));
            }
            self.defs.push(def);
        }
        Ok(())
    }

    /// Load a single RON file
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let content = fs::read_to_string(path.as_ref())?;
        self.load_str(&content)
    }

    /// Load all RON files from a directory (recursive)
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();

            if file_path.extension().map(|e| e == "ron").unwrap_or(false) {
                self.load_file(&file_path)?;
            } else if file_path.is_dir() {
                self.load_directory(&file_path)?;
            }
        }

        Ok(())
    }

    /// Validate the loaded definitions and build the catalog
    ///
    /// Every evolution target must resolve to a loaded ID, and a branching
    /// line must actually branch.
    pub fn finish(self) -> Result<Catalog> {
        if self.defs.is_empty() {
            return Err(Error::Empty);
        }

        let ids: HashSet<CreatureId> = self.defs.iter().map(|d| d.id).collect();
        for def in &self.defs {
            if let Some(to) = def.evolves_to {
                if !ids.contains(&to) {
                    return Err(Error::UnknownEvolutionTarget { from: def.id, to });
                }
            }
            if def.is_branching() {
                if def.branch_evolutions.len() < 2 {
                    return Err(Error::DegenerateBranch(def.id));
                }
                for &to in &def.branch_evolutions {
                    if !ids.contains(&to) {
                        return Err(Error::UnknownEvolutionTarget { from: def.id, to });
                    }
                }
            }
        }

        Ok(Catalog::from_defs(self.defs))
    }

    /// Get the definitions loaded so far (for inspection during loading)
    pub fn defs(&self) -> &[CreatureDef] {
        &self.defs
    }
}

/// The catalog embedded in the crate
pub fn builtin() -> Catalog {
    let mut loader = Loader::new();
    loader
        .load_str(include_str!("../data/kanto.ron"))
        .expect("built-in kanto data is valid");
    loader
        .load_str(include_str!("../data/johto.ron"))
        .expect("built-in johto data is valid");
    loader.finish().expect("built-in catalog is consistent")
}
