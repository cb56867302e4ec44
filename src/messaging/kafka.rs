use anyhow::Result;
use rdkafka::{
    config::ClientConfig,
    producer::{FutureProducer, FutureRecord},
};

/// Thin wrapper around an rdkafka producer.
pub struct KafkaClient {
    producer: FutureProducer,
}

impl KafkaClient {
    /// Build a producer for `brokers`. Connection happens lazily on first
    /// publish.
    pub fn new(brokers: &str) -> Result<Self> {
        let producer: FutureProducer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("message.timeout.ms", "5000")
            .create()?;

        Ok(Self { producer })
    }

    pub async fn publish(&self, topic: &str, key: &str, payload: &str) -> Result<()> {
        let record = FutureRecord::to(topic).key(key).payload(payload);

        self.producer
            .send(
                record,
                rdkafka::util::Timeout::After(std::time::Duration::from_secs(5)),
            )
            .await
            .map_err(|(e, _)| anyhow::anyhow!("kafka send error: {}", e))?;

        tracing::info!(
            topic = %topic,
            key = %key,
            "published to Kafka"
        );
        Ok(())
    }
}
