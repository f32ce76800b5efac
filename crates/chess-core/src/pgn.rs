//! PGN transcript parsing, built on a streaming pgn-reader visitor.

use std::mem;
use std::ops::ControlFlow;

use pgn_reader::{Nag, Outcome, RawComment, RawTag, Reader, SanPlus, Skip, Visitor};

use crate::error::PgnError;
use crate::game_data::{GameMetadata, GameRecord};

/// Parse a PGN transcript into a `GameRecord`.
///
/// Only the mainline is collected; variations, comments and NAGs are
/// skipped. A transcript with no game or no mainline moves is an error;
/// no repair is attempted.
pub fn parse_pgn(pgn: &str) -> Result<GameRecord, PgnError> {
    let mut reader = Reader::new(pgn.as_bytes());
    let mut visitor = TranscriptVisitor::new();

    let visited = reader.read_game(&mut visitor)?;
    let mut record = visited
        .and_then(|_| visitor.record.take())
        .ok_or(PgnError::EmptyTranscript)?;
    if record.moves.is_empty() {
        return Err(PgnError::NoMoves);
    }
    record.pgn = pgn.trim().to_string();
    Ok(record)
}

/// Collects header tags and mainline SAN tokens for a single game.
struct TranscriptVisitor {
    metadata: GameMetadata,
    result_marker: Option<String>,
    record: Option<GameRecord>,
}

impl TranscriptVisitor {
    fn new() -> Self {
        Self {
            metadata: GameMetadata {
                white: "Unknown".to_string(),
                black: "Unknown".to_string(),
                result: "*".to_string(),
                ..GameMetadata::default()
            },
            result_marker: None,
            record: None,
        }
    }
}

impl Visitor for TranscriptVisitor {
    type Tags = ();
    type Movetext = Vec<String>;
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        *self = Self::new();
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let value = String::from_utf8_lossy(value.as_bytes()).into_owned();
        if value.is_empty() {
            return ControlFlow::Continue(());
        }
        match key {
            b"White" => self.metadata.white = value,
            b"Black" => self.metadata.black = value,
            b"Result" => self.metadata.result = value,
            b"Date" => self.metadata.date = Some(value),
            b"Event" => self.metadata.event = Some(value),
            b"Site" => self.metadata.site = Some(value),
            b"TimeControl" => self.metadata.time_control = Some(value),
            _ => {}
        }
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(Vec::new())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, movetext: &mut Self::Movetext, san: SanPlus) -> ControlFlow<Self::Output> {
        movetext.push(san.to_string());
        ControlFlow::Continue(())
    }

    fn nag(&mut self, _: &mut Self::Movetext, _: Nag) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn comment(
        &mut self,
        _: &mut Self::Movetext,
        _: RawComment<'_>,
    ) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn outcome(
        &mut self,
        _: &mut Self::Movetext,
        outcome: Outcome,
    ) -> ControlFlow<Self::Output> {
        self.result_marker = Some(outcome.to_string());
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, movetext: Self::Movetext) -> Self::Output {
        if let Some(marker) = self.result_marker.take() {
            self.metadata.result = marker;
        }
        self.record = Some(GameRecord {
            metadata: mem::take(&mut self.metadata),
            moves: movetext,
            pgn: String::new(),
        });
    }
}
