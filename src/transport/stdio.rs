//! Line-delimited JSON-RPC over a byte stream, normally stdin and stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

use crate::errors::{AppError, RpcFault};
use crate::rpc::protocol::{encode_response, fault_to_json_rpc, Response};
use crate::rpc::server::handle_request;

/// Counts reported when the input stream ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ServeSummary {
    pub requests: u64,
    pub errors: u64,
}

/// Answers every non-blank input line with exactly one response line, flushing after each.
///
/// Returns at end of input. Only I/O failures on the streams end the loop early; a line that
/// is not valid UTF-8 is answered with a parse error.
pub async fn serve<R, W>(mut reader: R, mut writer: W) -> Result<ServeSummary, AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    let mut summary = ServeSummary::default();

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let response = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => {
                debug!("skipping blank input line");
                continue;
            }
            Ok(line) => handle_request(line),
            Err(err) => undecodable_line(&err),
        };
        summary.requests += 1;
        if response.is_error() {
            summary.errors += 1;
        }

        let mut framed = encode_response(&response);
        framed.push('\n');
        writer.write_all(framed.as_bytes()).await?;
        writer.flush().await?;
    }

    info!(
        requests = summary.requests,
        errors = summary.errors,
        "input closed, shutting down"
    );
    Ok(summary)
}

fn undecodable_line(err: &std::str::Utf8Error) -> Response {
    debug!(error = %err, "request line is not valid utf-8");
    fault_to_json_rpc(RpcFault::parse_error())
}

pub async fn serve_stdio() -> Result<ServeSummary, AppError> {
    info!("stdio transport started");
    serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}
