#![allow(dead_code)]
use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::A;
use hickory_proto::rr::{RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::net::{Ipv4Addr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock upstream replies to every query it receives.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one A record for the question name.
    Answer { ip: Ipv4Addr, ttl: u32 },
    /// Answerless reply with the given code.
    Rcode(ResponseCode),
    /// Never replies.
    Silent,
    /// Replies with a transaction id that does not match the query.
    WrongId,
    /// Truncated UDP reply; the full answer is served over TCP.
    Truncated { ip: Ipv4Addr, ttl: u32 },
}

pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    tcp_queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start(behavior: MockBehavior) -> Self {
        let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
        let addr = socket.local_addr().unwrap();
        let tcp = TcpListener::bind(addr).await.unwrap();

        let queries = Arc::new(AtomicUsize::new(0));
        let tcp_queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let udp_count = queries.clone();
        let tcp_count = tcp_queries.clone();
        tokio::spawn(async move {
            let mut buf = vec![0u8; 512];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            udp_count.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], &behavior, false) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                    accepted = tcp.accept() => {
                        if let Ok((mut stream, _)) = accepted {
                            tcp_count.fetch_add(1, Ordering::SeqCst);
                            let behavior = behavior.clone();
                            tokio::spawn(async move {
                                let mut len_buf = [0u8; 2];
                                if stream.read_exact(&mut len_buf).await.is_err() {
                                    return;
                                }
                                let mut query = vec![0u8; u16::from_be_bytes(len_buf) as usize];
                                if stream.read_exact(&mut query).await.is_err() {
                                    return;
                                }
                                if let Some(response) = Self::build_response(&query, &behavior, true) {
                                    let _ = stream.write_all(&(response.len() as u16).to_be_bytes()).await;
                                    let _ = stream.write_all(&response).await;
                                }
                            });
                        }
                    }
                }
            }
        });

        Self {
            addr,
            queries,
            tcp_queries,
            shutdown_tx: Some(shutdown_tx),
        }
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn tcp_query_count(&self) -> usize {
        self.tcp_queries.load(Ordering::SeqCst)
    }

    fn build_response(query: &[u8], behavior: &MockBehavior, over_tcp: bool) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;
        let question = request.queries().first()?.clone();

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true)
            .add_query(question.clone());

        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Answer { ip, ttl } => {
                response.add_answer(Record::from_rdata(
                    question.name().clone(),
                    *ttl,
                    RData::A(A(*ip)),
                ));
            }
            MockBehavior::Rcode(code) => {
                response.set_response_code(*code);
            }
            MockBehavior::WrongId => {
                response.set_id(request.id().wrapping_add(1));
            }
            MockBehavior::Truncated { ip, ttl } => {
                if over_tcp {
                    response.add_answer(Record::from_rdata(
                        question.name().clone(),
                        *ttl,
                        RData::A(A(*ip)),
                    ));
                } else {
                    response.set_truncated(true);
                }
            }
        }

        response.to_bytes().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
