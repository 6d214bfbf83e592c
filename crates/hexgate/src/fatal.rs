use crate::Error;

/// Exit status used when the input stream can no longer feed the adapter
/// (`EX_IOERR` from `sysexits.h`).
pub const STREAM_FAILURE_EXIT_CODE: i32 = 74;

/// Called when a refill fails inside an infallible accessor such as
/// [`StreamRng::next_raw_word`].
///
/// A handler must not return, since the callback contract of a test battery
/// has no error channel. The default, [`exit_on_fatal`], terminates the
/// process. Tests can install a handler that panics instead.
///
/// [`StreamRng::next_raw_word`]: crate::StreamRng::next_raw_word
pub type FatalHandler = fn(&Error) -> !;

/// Reports `err` on stderr and exits with [`STREAM_FAILURE_EXIT_CODE`].
pub fn exit_on_fatal(err: &Error) -> ! {
    #[cfg(feature = "tracing")]
    tracing::error!(error = %err, "input stream failed, terminating");

    eprintln!("Fatal error: failed to read random number from stdin: {err}");
    std::process::exit(STREAM_FAILURE_EXIT_CODE)
}
