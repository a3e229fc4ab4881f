//! Process-wide registry of the stylesheets every page of the site includes.
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use log::{debug, info};

use crate::errors::StyleError;
use crate::highlight;
use crate::logging::{FormatElapsedTimeOptions, format_elapsed_time};
use crate::options::ShellOptions;

pub const CODE_STYLESHEET: &str = "code";
pub const GLOBAL_STYLESHEET: &str = "global";

static REGISTRY: OnceLock<StyleRegistry> = OnceLock::new();
static MATERIALIZED: OnceLock<Vec<PathBuf>> = OnceLock::new();
static INITIALIZATIONS: AtomicUsize = AtomicUsize::new(0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSource {
    /// A stylesheet living on disk.
    File(PathBuf),
    /// A stylesheet generated at runtime, written to `file_name` when materialized.
    Generated { file_name: String, css: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleResource {
    pub name: String,
    pub source: StyleSource,
}

impl StyleResource {
    pub fn file<N: Into<String>, P: Into<PathBuf>>(name: N, path: P) -> Self {
        Self {
            name: name.into(),
            source: StyleSource::File(path.into()),
        }
    }

    pub fn generated<N: Into<String>, F: Into<String>, C: Into<String>>(
        name: N,
        file_name: F,
        css: C,
    ) -> Self {
        Self {
            name: name.into(),
            source: StyleSource::Generated {
                file_name: file_name.into(),
                css: css.into(),
            },
        }
    }

    fn path_in(&self, dir: &Path) -> PathBuf {
        match &self.source {
            StyleSource::File(path) => path.clone(),
            StyleSource::Generated { file_name, .. } => dir.join(file_name),
        }
    }
}

/// Ordered set of stylesheets, keyed by name.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    resources: Vec<StyleResource>,
    generated_dir: PathBuf,
}

impl StyleRegistry {
    pub fn new<P: Into<PathBuf>>(generated_dir: P) -> Self {
        Self {
            resources: Vec::new(),
            generated_dir: generated_dir.into(),
        }
    }

    /// The registry shared by the whole process, if a shell initialized it already.
    pub fn global() -> Option<&'static StyleRegistry> {
        REGISTRY.get()
    }

    /// Add a stylesheet. Registering a name twice keeps the first resource and returns `false`.
    pub fn register(&mut self, resource: StyleResource) -> bool {
        if self.resources.iter().any(|r| r.name == resource.name) {
            debug!(target: "vitrine", "style `{}` is already registered", resource.name);
            return false;
        }

        debug!(target: "vitrine", "registering style `{}`", resource.name);
        self.resources.push(resource);
        true
    }

    pub fn get(&self, name: &str) -> Option<&StyleResource> {
        self.resources.iter().find(|r| r.name == name)
    }

    pub fn resources(&self) -> &[StyleResource] {
        &self.resources
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }

    pub fn generated_dir(&self) -> &Path {
        &self.generated_dir
    }

    /// Write generated stylesheets to disk and return the path of every stylesheet, in registration order.
    pub fn materialize(&self) -> Result<Vec<PathBuf>, StyleError> {
        let mut paths = Vec::with_capacity(self.resources.len());

        for resource in &self.resources {
            let path = resource.path_in(&self.generated_dir);

            if let StyleSource::Generated { css, .. } = &resource.source {
                std::fs::create_dir_all(&self.generated_dir)
                    .and_then(|_| std::fs::write(&path, css))
                    .map_err(|source| StyleError::WriteFailed {
                        path: path.clone(),
                        source,
                    })?;
                debug!(target: "vitrine", "wrote style `{}` to {}", resource.name, path.display());
            }

            paths.push(path);
        }

        Ok(paths)
    }
}

/// The two stylesheets every page gets: the code presentation stylesheet, then the site's global stylesheet.
pub fn default_styles(options: &ShellOptions) -> Result<StyleRegistry, StyleError> {
    let code_css = highlight::stylesheet(&options.highlight_theme).map_err(|source| {
        StyleError::GenerationFailed {
            name: CODE_STYLESHEET.to_string(),
            source,
        }
    })?;

    let mut registry = StyleRegistry::new(&options.generated_styles_dir);
    registry.register(StyleResource::generated(
        CODE_STYLESHEET,
        "code.css",
        code_css,
    ));
    registry.register(StyleResource::file(
        GLOBAL_STYLESHEET,
        &options.global_stylesheet,
    ));

    Ok(registry)
}

/// Initialize the process-wide registry. Only the first successful call has any effect.
pub fn register_default_styles(options: &ShellOptions) -> Result<&'static StyleRegistry, StyleError> {
    if let Some(registry) = REGISTRY.get() {
        return Ok(registry);
    }

    // Build outside of the cell so that a failure leaves it empty for a later attempt.
    let registry = default_styles(options)?;

    Ok(REGISTRY.get_or_init(|| {
        INITIALIZATIONS.fetch_add(1, Ordering::SeqCst);
        info!(target: "vitrine", "registered {} styles", registry.len());
        registry
    }))
}

/// Paths of the global registry's stylesheets, generated ones written to disk on first call.
pub fn materialized_styles() -> Result<&'static [PathBuf], StyleError> {
    let Some(registry) = REGISTRY.get() else {
        return Ok(&[]);
    };

    if let Some(paths) = MATERIALIZED.get() {
        return Ok(paths.as_slice());
    }

    let start = Instant::now();
    let paths = registry.materialize()?;
    info!(
        target: "vitrine",
        "prepared {} styles {}",
        paths.len(),
        format_elapsed_time(start.elapsed(), &FormatElapsedTimeOptions::default())
    );

    Ok(MATERIALIZED.get_or_init(|| paths).as_slice())
}

/// How many times the process-wide registry has been initialized, either 0 or 1.
pub fn initialization_count() -> usize {
    INITIALIZATIONS.load(Ordering::SeqCst)
}
