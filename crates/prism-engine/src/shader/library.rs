use std::borrow::Cow;
use std::fmt;

use anyhow::{anyhow, bail, Result};
use wgpu::naga;

/// Pipeline stage a shader function is declared for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Compute,
}

impl ShaderStage {
    fn from_naga(stage: naga::ShaderStage) -> Option<Self> {
        match stage {
            naga::ShaderStage::Vertex => Some(Self::Vertex),
            naga::ShaderStage::Fragment => Some(Self::Fragment),
            naga::ShaderStage::Compute => Some(Self::Compute),
            // Task/mesh stages are never built into a pipeline here.
            #[allow(unreachable_patterns)]
            _ => None,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
            ShaderStage::Compute => "compute",
        })
    }
}

/// A named, stage-tagged function in a [`ShaderLibrary`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct EntryPoint {
    pub name: String,
    pub stage: ShaderStage,
}

/// A WGSL module that has already passed naga's parser and validator.
///
/// The device is handed the validated IR, so compile errors are reported by
/// [`from_wgsl`](Self::from_wgsl) instead of the device's error handler.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    label: String,
    module: naga::Module,
    entry_points: Vec<EntryPoint>,
}

impl ShaderLibrary {
    pub fn from_wgsl(label: impl Into<String>, source: &str) -> Result<Self> {
        let label = label.into();

        let module = naga::front::wgsl::parse_str(source).map_err(|e| {
            anyhow!(
                "shader library '{label}' failed to parse:\n{}",
                e.emit_to_string(source)
            )
        })?;

        naga::valid::Validator::new(
            naga::valid::ValidationFlags::all(),
            naga::valid::Capabilities::empty(),
        )
        .validate(&module)
        .map_err(|e| {
            anyhow!(
                "shader library '{label}' failed validation:\n{}",
                e.emit_to_string(source)
            )
        })?;

        let entry_points = module
            .entry_points
            .iter()
            .filter_map(|ep| {
                let stage = ShaderStage::from_naga(ep.stage)?;
                Some(EntryPoint {
                    name: ep.name.clone(),
                    stage,
                })
            })
            .collect();

        Ok(Self {
            label,
            module,
            entry_points,
        })
    }

    pub fn entry_points(&self) -> &[EntryPoint] {
        &self.entry_points
    }

    /// Function names in declaration order.
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.entry_points.iter().map(|e| e.name.as_str())
    }

    /// Resolves a function by name, requiring it to be declared for `stage`.
    pub fn function(&self, name: &str, stage: ShaderStage) -> Result<&EntryPoint> {
        let Some(entry) = self.entry_points.iter().find(|e| e.name == name) else {
            let available: Vec<&str> = self.function_names().collect();
            bail!(
                "shader library '{}' has no function '{name}' (available: [{}])",
                self.label,
                available.join(", ")
            );
        };

        if entry.stage != stage {
            bail!(
                "shader function '{name}' in '{}' is a {} function, expected {stage}",
                self.label,
                entry.stage
            );
        }

        Ok(entry)
    }

    #[cfg(test)]
    pub(crate) fn module(&self) -> &naga::Module {
        &self.module
    }

    /// Hands the validated module to the device.
    pub fn create_module(&self, device: &wgpu::Device) -> wgpu::ShaderModule {
        device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(&self.label),
            source: wgpu::ShaderSource::Naga(Cow::Owned(self.module.clone())),
        })
    }

    /// Logs the library's functions at debug level.
    pub fn log_contents(&self) {
        log::debug!("shader library '{}':", self.label);
        for e in &self.entry_points {
            log::debug!("  {} function {}", e.stage, e.name);
        }
    }
}
