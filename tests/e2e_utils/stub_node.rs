#![allow(dead_code)]

use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::service::service_fn;
use hyper::{Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use hyper_util::server::conn::auto::Builder as ServerBuilder;

/// Minimal stand-in for a blockchain proxy: serves /node/heartbeatstatus
/// with a fixed status code and a small JSON body, 404 for anything else.
pub struct StubNodeServer {
    addr: SocketAddr,
    _server_handle: JoinHandle<()>,
}

impl StubNodeServer {
    pub async fn start(heartbeat_status: u16) -> Result<Self, Box<dyn std::error::Error>> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;

        let server_handle = tokio::spawn(async move {
            loop {
                match listener.accept().await {
                    Ok((stream, _)) => {
                        let io = TokioIo::new(stream);

                        tokio::spawn(async move {
                            let service_fn = service_fn(move |req: Request<hyper::body::Incoming>| async move {
                                let response = if req.uri().path() == "/node/heartbeatstatus" {
                                    Response::builder()
                                        .status(StatusCode::from_u16(heartbeat_status).unwrap())
                                        .header("content-type", "application/json")
                                        .body(Full::new(Bytes::from_static(b"{\"status\":\"ok\"}")))
                                        .unwrap()
                                } else {
                                    Response::builder()
                                        .status(StatusCode::NOT_FOUND)
                                        .body(Full::new(Bytes::new()))
                                        .unwrap()
                                };
                                Ok::<_, hyper::Error>(response)
                            });

                            if let Err(_err) = ServerBuilder::new(hyper_util::rt::TokioExecutor::new())
                                .http1()
                                .serve_connection(io, service_fn)
                                .await
                            {
                                // Silently handle errors in test
                            }
                        });
                    }
                    Err(_) => break,
                }
            }
        });

        Ok(Self {
            addr,
            _server_handle: server_handle,
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }
}
