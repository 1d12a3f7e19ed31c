//! Transport layer that logs every RPC request going out to the node.
use {
    alloy::{
        rpc::json_rpc::{RequestPacket, ResponsePacket},
        transports::TransportError,
    },
    std::{
        fmt::Debug,
        pin::Pin,
        task::{Context, Poll},
        time::Instant,
    },
    tower::{Layer, Service},
};

pub(crate) struct InstrumentationLayer;

impl<S> Layer<S> for InstrumentationLayer {
    type Service = InstrumentedTransport<S>;

    fn layer(&self, inner: S) -> Self::Service {
        InstrumentedTransport { inner }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct InstrumentedTransport<S> {
    inner: S,
}

impl<S> Service<RequestPacket> for InstrumentedTransport<S>
where
    S: Service<RequestPacket, Response = ResponsePacket, Error = TransportError>,
    S::Future: Send + 'static,
    S::Response: Send + 'static + Debug,
    S::Error: Send + 'static + Debug,
{
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;
    type Response = S::Response;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, req: RequestPacket) -> Self::Future {
        let methods: Vec<String> = req
            .requests()
            .iter()
            .map(|r| r.method().to_string())
            .collect();
        tracing::trace!(?methods, "executing request");

        let start = Instant::now();
        let fut = self.inner.call(req);
        Box::pin(async move {
            let res = fut.await;
            match &res {
                Ok(_) => tracing::trace!(?methods, elapsed = ?start.elapsed(), "request succeeded"),
                Err(err) => tracing::debug!(?methods, ?err, "request failed"),
            }
            res
        })
    }
}
