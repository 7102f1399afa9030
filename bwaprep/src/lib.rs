#[cfg(feature = "core")]
#[doc(inline)]
pub use bwaprep_core as core;

#[cfg(feature = "align")]
#[doc(inline)]
pub use bwaprep_align as align;

#[cfg(feature = "split")]
#[doc(inline)]
pub use bwaprep_split as split;
