//! Blocking HTTP server for the download route.

use super::{PromoResponse, PromoService, Renderer, ServiceConfig};
use crate::composer::Composer;
use crate::error::{Error, Result};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use tiny_http::{Header, Request, Response, Server};

/// A bound `tiny_http` server answering with a [`PromoService`].
///
/// [`run`](PromoServer::run) blocks on a pool of worker threads until
/// [`shutdown`](PromoServer::shutdown) is called from another thread.
pub struct PromoServer<R = Composer> {
    server: Server,
    service: PromoService<R>,
    workers: usize,
    stopping: AtomicBool,
}

impl PromoServer<Composer> {
    /// Bind according to `config`.
    pub fn bind(config: &ServiceConfig) -> Result<Self> {
        config.validate()?;
        Self::with_service(config, PromoService::from_config(config))
    }
}

impl<R: Renderer> PromoServer<R> {
    /// Bind `config.bind` and answer with `service`.
    pub fn with_service(config: &ServiceConfig, service: PromoService<R>) -> Result<Self> {
        if config.workers == 0 {
            return Err(Error::Config("workers must be at least 1".to_string()));
        }
        let server = Server::http(config.bind.as_str())
            .map_err(|e| Error::Server(format!("failed to bind {}: {}", config.bind, e)))?;
        Ok(Self {
            server,
            service,
            workers: config.workers,
            stopping: AtomicBool::new(false),
        })
    }

    /// Socket address actually bound (useful with port 0).
    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.server.server_addr().to_ip()
    }

    /// Serve requests until [`shutdown`](Self::shutdown).
    pub fn run(&self) -> Result<()> {
        log::info!(
            "serving {} on {} with {} workers (base URL {})",
            super::ROUTE,
            self.server.server_addr(),
            self.workers,
            self.service.base_url()
        );

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..self.workers)
                .map(|id| {
                    std::thread::Builder::new()
                        .name(format!("promo-worker-{}", id))
                        .spawn_scoped(scope, move || self.worker_loop(id))
                        .map_err(|e| Error::Server(format!("failed to spawn worker: {}", e)))
                })
                .collect();

            let (started, failed): (Vec<_>, Vec<_>) = handles.into_iter().partition(|h| h.is_ok());
            let mut result = match failed.into_iter().find_map(|h| h.err()) {
                Some(e) => {
                    // stop the workers that did start
                    self.shutdown();
                    Err(e)
                },
                None => Ok(()),
            };
            for handle in started.into_iter().flatten() {
                if handle.join().is_err() {
                    result = Err(Error::Server("worker thread panicked".to_string()));
                }
            }
            result
        })
    }

    /// Ask every worker to stop once its current request is answered.
    pub fn shutdown(&self) {
        self.stopping.store(true, Ordering::SeqCst);
        for _ in 0..self.workers {
            self.server.unblock();
        }
    }

    fn worker_loop(&self, id: usize) {
        while !self.stopping.load(Ordering::SeqCst) {
            match self.server.recv() {
                Ok(request) => self.respond(request),
                Err(e) => {
                    if self.stopping.load(Ordering::SeqCst) {
                        break;
                    }
                    log::warn!("worker {}: receive failed: {}", id, e);
                },
            }
        }
        log::debug!("worker {} stopped", id);
    }

    fn respond(&self, request: Request) {
        let reply = self
            .service
            .handle(request.method().as_str(), request.url());
        if let Err(e) = request.respond(into_http(reply)) {
            log::warn!("failed to write response: {}", e);
        }
    }
}

fn into_http(reply: PromoResponse) -> Response<std::io::Cursor<Vec<u8>>> {
    let mut response = Response::from_data(reply.body).with_status_code(reply.status);
    for (name, value) in &reply.headers {
        match Header::from_bytes(name.as_bytes(), value.as_bytes()) {
            Ok(header) => response.add_header(header),
            Err(()) => log::warn!("dropping invalid header {}", name),
        }
    }
    response
}
