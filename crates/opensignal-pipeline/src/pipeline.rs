use std::path::PathBuf;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::info;

use opensignal_brief::BriefGenerator;
use opensignal_envelope::{
    Clock, EnvelopeFactory, Event, EventId, IdGenerator, Payload, SystemClock, UuidGenerator,
};
use opensignal_rules::RuleEngine;
use opensignal_sink::{EventSink, NdjsonSink};
use opensignal_transport::{InMemoryTransport, Transport};

use crate::collector::EventCollector;
use crate::config::PipelineConfig;
use crate::error::{PipelineError, PipelineResult};
use crate::synthetic::SyntheticSignal;

/// Summary of a finished run.
#[derive(Clone, Debug)]
pub struct PipelineReport {
    /// Events that reached the sink.
    pub processed: usize,
    /// Time from pipeline start to the end of the sink write.
    pub elapsed: Duration,
    /// Configured NDJSON output path.
    pub output: PathBuf,
    /// Brief path, if a brief was written.
    pub brief: Option<PathBuf>,
}

impl PipelineReport {
    pub fn events_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.processed as f64 / secs
        } else {
            0.0
        }
    }
}

/// One pass of the OpenSignal pipeline.
///
/// On construction a single handler is subscribed to the configured stream.
/// It enriches each published event exactly once and collects the enriched
/// record. [`Pipeline::finish`] then hands the collected batch to the sink
/// and, if configured, renders the brief.
pub struct Pipeline<I = UuidGenerator, C = SystemClock> {
    config: PipelineConfig,
    factory: EnvelopeFactory<I, C>,
    transport: Arc<dyn Transport>,
    sink: Box<dyn EventSink>,
    collector: EventCollector,
    started: Instant,
}

impl Pipeline {
    /// Standard pipeline: system ids and clock, in-memory transport, and an
    /// NDJSON sink at `config.output`.
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        let sink = NdjsonSink::new(config.output.clone());
        Self::with_components(
            config,
            EnvelopeFactory::system(),
            Arc::new(InMemoryTransport::new()),
            Box::new(sink),
        )
    }
}

impl<I: IdGenerator, C: Clock> Pipeline<I, C> {
    /// Assemble a pipeline from explicit components.
    pub fn with_components(
        config: PipelineConfig,
        factory: EnvelopeFactory<I, C>,
        transport: Arc<dyn Transport>,
        sink: Box<dyn EventSink>,
    ) -> PipelineResult<Self> {
        let engine = Arc::new(RuleEngine::from_config(&config.rule_set())?);
        let collector = EventCollector::new();

        // Subscribe before publishing: the transport does not replay.
        transport.subscribe(&config.stream, collector.enriching_handler(engine))?;

        info!(stream = %config.stream, rules = config.rules.len(), "pipeline ready");

        Ok(Self {
            config,
            factory,
            transport,
            sink,
            collector,
            started: Instant::now(),
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// The transport, for attaching additional subscribers.
    pub fn transport(&self) -> &Arc<dyn Transport> {
        &self.transport
    }

    /// Create an event and publish it on the configured stream.
    pub fn ingest(
        &self,
        event_type: &str,
        source: &str,
        data: Payload,
    ) -> PipelineResult<EventId> {
        let event = self.factory.create_event(event_type, source, data);
        self.publish(&event)?;
        Ok(event.id)
    }

    /// Publish an already-built event on the configured stream.
    pub fn publish(&self, event: &Event) -> PipelineResult<()> {
        self.transport.publish(&self.config.stream, event)?;
        Ok(())
    }

    /// Ingest every signal from a feed. Returns how many were published.
    pub fn ingest_all<S>(&self, signals: S) -> PipelineResult<usize>
    where
        S: IntoIterator<Item = SyntheticSignal>,
    {
        let mut count = 0;
        for signal in signals {
            self.ingest(signal.event_type, signal.source, signal.data)?;
            count += 1;
        }
        Ok(count)
    }

    /// Events enriched so far.
    pub fn processed(&self) -> PipelineResult<usize> {
        self.collector.len()
    }

    /// Enriched events collected so far, in publish order.
    pub fn events(&self) -> PipelineResult<Vec<Event>> {
        self.collector.snapshot()
    }

    /// Persist the batch, render the brief if enabled, and report.
    pub fn finish(self) -> PipelineResult<PipelineReport> {
        let events = self.collector.take()?;
        self.sink.write(&events)?;
        let elapsed = self.started.elapsed();

        let brief = if self.config.write_brief {
            let text = BriefGenerator::new(self.config.brief_title.as_str()).generate(&events);
            write_brief(&self.config.brief_path, &text)?;
            Some(self.config.brief_path.clone())
        } else {
            None
        };

        let report = PipelineReport {
            processed: events.len(),
            elapsed,
            output: self.config.output.clone(),
            brief,
        };
        info!(
            processed = report.processed,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "pipeline finished"
        );
        Ok(report)
    }
}

fn write_brief(path: &std::path::Path, text: &str) -> PipelineResult<()> {
    let io_err = |source| PipelineError::Brief {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    std::fs::write(path, text).map_err(io_err)
}
