use crate::attrs::Attributes;
use crate::config::AugmentConfig;
use crate::function::{FuncMap, Function};
use crate::relational::relational_adapters;
use crate::signature::FunctionSignature;
use crate::wrap::build_wrapper;
use litcast_core::Result;
use log::debug;

/// Whether calls to `f` should have their literals resolved.
pub fn is_numeric_sensitive(f: &Function) -> bool {
    if f.attrs().intersects(Attributes::COERCING | Attributes::RELATIONAL) {
        return false;
    }
    f.attrs().contains(Attributes::NUMERIC)
        || f.params().iter().any(|p| p.kind.is_numeric())
}

pub fn augment(registry: &FuncMap) -> Result<FuncMap> {
    augment_with(registry, &AugmentConfig::default())
}

/// Build a new registry in which numeric-sensitive entries are wrapped and
/// the comparison built-ins are replaced by their adapters. `registry` is
/// left as it was.
pub fn augment_with(registry: &FuncMap, config: &AugmentConfig) -> Result<FuncMap> {
    let mut out = FuncMap::new();
    for f in registry.iter() {
        if config.is_excluded(f.name()) || !is_numeric_sensitive(f) {
            out.insert(f.clone());
            continue;
        }
        let wrapped = build_wrapper(f.name(), f)?;
        debug!("wrapped {} as {:?}", f.name(), FunctionSignature::derive(&wrapped).ok());
        out.insert(wrapped);
    }
    if config.relational {
        for adapter in relational_adapters() {
            if config.is_excluded(adapter.name()) {
                continue;
            }
            debug!("replacing built-in {}", adapter.name());
            out.insert(adapter.clone());
        }
    }
    Ok(out)
}
