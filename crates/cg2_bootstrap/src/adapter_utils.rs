use crate::log_stream::LogStream;
use crate::windy_error::BootstrapError;
use crate::windy_error::MyResult;
use std::io::Write;
use tracing::debug;

/// A platform adapter handle together with what the platform says about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterDescriptor<A> {
    pub adapter: A,
    pub name: String,
    pub is_software: bool,
}

/// Hands out adapters in the host's performance-preference order.
pub trait AdapterSource {
    type Adapter;

    /// The adapter at `index`, or `None` once the list is exhausted.
    fn adapter_by_preference(
        &self,
        index: u32,
    ) -> MyResult<Option<AdapterDescriptor<Self::Adapter>>>;
}

/// Returns the first adapter, in platform preference order, that is not a
/// software adapter.
///
/// Adapters after the chosen one are never queried. A failed query at any
/// index ends the search with [`BootstrapError::AdapterQuery`] rather than
/// skipping the adapter.
pub fn select_hardware_adapter<S, W>(
    log: &mut LogStream<W>,
    source: &S,
) -> MyResult<AdapterDescriptor<S::Adapter>>
where
    S: AdapterSource,
    W: Write,
{
    let mut index = 0;
    loop {
        let candidate = source
            .adapter_by_preference(index)
            .map_err(|e| e.wrap_err(BootstrapError::AdapterQuery { index }))?;

        let Some(candidate) = candidate else {
            return Err(BootstrapError::NoHardwareAdapter { inspected: index }.into());
        };

        if !candidate.is_software {
            log.log(format!("Use Adapter:{}", candidate.name))?;
            return Ok(candidate);
        }

        debug!("Adapter {}: {} (software adapter, skipping)", index, candidate.name);
        index += 1;
    }
}
