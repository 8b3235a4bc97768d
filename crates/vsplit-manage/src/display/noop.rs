//! No-op display source, used when nothing can be queried.

use std::collections::BTreeMap;

use super::{DisplaySource, OutputInfo, Result};

pub struct NoopDisplaySource;

impl DisplaySource for NoopDisplaySource {
    fn outputs(&self) -> Result<BTreeMap<String, OutputInfo>> {
        Ok(BTreeMap::new())
    }
}
