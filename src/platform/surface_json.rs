/// JSON-emitting render surface: serializes each applied graph descriptor
/// to a writer. Used by the CLI with stdout as the writer.

use std::io::Write;

use crate::core::types::SpatialGraph;
use crate::platform::surface::RenderSurface;

pub struct JsonSurface<W: Write> {
    out: W,
    pretty: bool,
}

impl<W: Write> JsonSurface<W> {
    pub fn new(out: W, pretty: bool) -> Self {
        Self { out, pretty }
    }
}

impl<W: Write> RenderSurface for JsonSurface<W> {
    fn mount(&mut self) {
        log::debug!("json surface mounted");
    }

    fn apply(&mut self, graph: &SpatialGraph) {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut self.out, graph)
        } else {
            serde_json::to_writer(&mut self.out, graph)
        };
        if let Err(e) = result.and_then(|_| {
            self.out.write_all(b"\n").map_err(serde_json::Error::io)
        }) {
            log::error!("failed to emit graph descriptor: {}", e);
        }
    }

    fn resize(&mut self, _width: u32, _height: u32) {}

    fn unmount(&mut self) {
        let _ = self.out.flush();
    }
}
