use std::collections::BTreeMap;
use std::ffi::OsString;
use std::sync::OnceLock;

use magickwand_sys as ffi;

use crate::error::{ErrorKind, Result, ResultExt};
use crate::types::ResourceType;
use crate::util::from_magick_bool;

const ENV_PREFIX: &str = "MAGICKWAND_LIMIT_";
const ENV_DEBUG: &str = "MAGICKWAND_DEBUG";

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Process wide settings applied when the native environment is created
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    resource_limits: BTreeMap<ResourceType, u64>,
    pub debug: bool,
}

impl Config {
    /// Configuration read from the environment on first use
    pub fn cached() -> &'static Self {
        CONFIG.get_or_init(Self::from_env)
    }

    pub fn from_env() -> Self {
        Self::from_vars_os(std::env::vars_os())
    }

    /// Skips variables that are not valid UTF-8
    fn from_vars_os(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        Self::from_vars(vars.into_iter().filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            match value.into_string() {
                Ok(value) => Some((key, value)),
                Err(value) => {
                    if key.starts_with(ENV_PREFIX) || key == ENV_DEBUG {
                        tracing::warn!("Ignoring {key}={value:?}: not valid UTF-8");
                    }
                    None
                }
            }
        }))
    }

    pub(crate) fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut config = Config::default();

        for (key, value) in vars {
            if key == ENV_DEBUG {
                config.debug = !value.is_empty() && value != "0";
                continue;
            }

            let Some(name) = key.strip_prefix(ENV_PREFIX) else {
                continue;
            };

            let Some(resource) = ResourceType::ALL
                .iter()
                .copied()
                .find(|x| x.env_name() == Some(name))
            else {
                tracing::warn!("Unknown resource in {key}");
                continue;
            };

            match value.trim().parse::<u64>() {
                Ok(limit) => config.set_resource_limit(resource, limit),
                Err(err) => tracing::warn!("Ignoring {key}={value:?}: {err}"),
            }
        }

        config
    }

    pub fn resource_limit(&self, resource: ResourceType) -> Option<u64> {
        self.resource_limits.get(&resource).copied()
    }

    pub fn set_resource_limit(&mut self, resource: ResourceType, limit: u64) {
        self.resource_limits.insert(resource, limit);
    }

    pub fn resource_limits(&self) -> impl Iterator<Item = (ResourceType, u64)> + '_ {
        self.resource_limits
            .iter()
            .map(|(resource, limit)| (*resource, *limit))
    }

    /// Sets all configured limits in the native library
    pub fn apply(&self) -> Result<()> {
        crate::genesis::genesis();
        self.apply_limits()
    }

    pub(crate) fn apply_limits(&self) -> Result<()> {
        for (resource, limit) in self.resource_limits() {
            native_set_resource_limit(resource, limit)?;
        }

        Ok(())
    }
}

/// Limits a native resource for the whole process
pub fn set_resource_limit(resource: ResourceType, limit: u64) -> Result<()> {
    crate::genesis::genesis();
    native_set_resource_limit(resource, limit)
}

fn native_set_resource_limit(resource: ResourceType, limit: u64) -> Result<()> {
    let status = unsafe { ffi::MagickSetResourceLimit(resource.into_native(), limit) };

    if from_magick_bool(status) {
        tracing::debug!("Set {resource} resource limit to {limit}");
        Ok(())
    } else {
        Err(ErrorKind::ResourceLimit {
            resource: resource.to_string(),
            limit,
        })
        .err_operation("MagickSetResourceLimit")
    }
}

/// Current limit of a native resource
pub fn resource_limit(resource: ResourceType) -> u64 {
    crate::genesis::genesis();

    unsafe { ffi::MagickGetResourceLimit(resource.into_native()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(list: &[(&str, &str)]) -> Vec<(String, String)> {
        list.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn limits_from_env() {
        let config = Config::from_vars(vars(&[
            ("MAGICKWAND_LIMIT_MEMORY", "268435456"),
            ("MAGICKWAND_LIMIT_THREAD", " 2 "),
            ("MAGICKWAND_LIMIT_LIST_LENGTH", "64"),
            ("PATH", "/usr/bin"),
        ]));

        assert_eq!(config.resource_limit(ResourceType::Memory), Some(268435456));
        assert_eq!(config.resource_limit(ResourceType::Thread), Some(2));
        assert_eq!(config.resource_limit(ResourceType::Disk), None);
        assert!(!config.debug);
        assert_eq!(config.resource_limit(ResourceType::ListLength), Some(64));
        assert_eq!(config.resource_limits().count(), 3);
    }

    #[test]
    fn invalid_values_ignored() {
        let config = Config::from_vars(vars(&[
            ("MAGICKWAND_LIMIT_MEMORY", "256MiB"),
            ("MAGICKWAND_LIMIT_UNKNOWN", "1"),
            ("MAGICKWAND_LIMIT_UNDEFINED", "1"),
        ]));

        assert_eq!(config, Config::default());
    }

    #[test]
    fn non_utf8_environment() {
        use std::os::unix::ffi::OsStringExt;

        let config = Config::from_vars_os([
            (
                OsString::from("UNRELATED"),
                OsString::from_vec(b"\xff\xfe".to_vec()),
            ),
            (
                OsString::from_vec(b"\xffKEY".to_vec()),
                OsString::from("1"),
            ),
            (
                OsString::from("MAGICKWAND_LIMIT_DISK"),
                OsString::from_vec(b"1\xff".to_vec()),
            ),
            (
                OsString::from("MAGICKWAND_LIMIT_FILE"),
                OsString::from("16"),
            ),
        ]);

        assert_eq!(config.resource_limit(ResourceType::Disk), None);
        assert_eq!(config.resource_limit(ResourceType::File), Some(16));
        assert_eq!(config.resource_limits().count(), 1);
    }

    #[test]
    fn debug_flag() {
        assert!(Config::from_vars(vars(&[("MAGICKWAND_DEBUG", "1")])).debug);
        assert!(!Config::from_vars(vars(&[("MAGICKWAND_DEBUG", "0")])).debug);
        assert!(!Config::from_vars(vars(&[("MAGICKWAND_DEBUG", "")])).debug);
    }
}
