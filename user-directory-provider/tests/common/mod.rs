//! 共享测试工具和辅助函数

#![allow(dead_code)]

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use user_directory_provider::{ProviderConfig, UserSource, create_source};

/// 断言 `Result` 为 `Ok`，并解包返回内部值（失败则直接让测试失败）。
#[macro_export]
macro_rules! require_ok {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_ok(), "expected Ok(..), got {res:?}");
        let Ok(val) = res else {
            return;
        };
        val
    }};
}

/// 断言 `Result` 为 `Err`，并解包返回错误值。
#[macro_export]
macro_rules! require_err {
    ($expr:expr $(,)?) => {{
        let res = $expr;
        assert!(res.is_err(), "expected Err(..), got {res:?}");
        let Err(err) = res else {
            return;
        };
        err
    }};
}

/// 只应答一次的本地 HTTP 服务
pub struct OneShotServer {
    /// `http://127.0.0.1:{port}`
    pub base_url: String,
    /// 收到的原始请求头（小写）
    pub request: oneshot::Receiver<String>,
}

/// 启动一个应答固定状态行与 JSON 正文的本地服务
pub async fn serve_once(status_line: &'static str, body: &'static str) -> OneShotServer {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let Ok((mut socket, _)) = listener.accept().await else {
            return;
        };

        let mut buf = vec![0_u8; 8192];
        let mut read = 0;
        while read < buf.len() {
            let Ok(n) = socket.read(&mut buf[read..]).await else {
                break;
            };
            if n == 0 {
                break;
            }
            read += n;
            if buf[..read].windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }

        let response = format!(
            "HTTP/1.1 {status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        let _ = socket.write_all(response.as_bytes()).await;
        let _ = socket.shutdown().await;
        let _ = tx.send(String::from_utf8_lossy(&buf[..read]).to_lowercase());
    });

    OneShotServer {
        base_url: format!("http://{addr}"),
        request: rx,
    }
}

/// 一个刚刚释放、无人监听的本地端口
///
/// 返回前监听器已经关闭，之后的连接会被直接拒绝。
pub async fn closed_port_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind local listener");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    format!("http://{addr}")
}

/// 指向本地服务的数据源
pub fn source_for(base_url: &str) -> Arc<dyn UserSource> {
    create_source(&ProviderConfig::with_base_url(base_url)).expect("create source")
}

/// 七个用户的集合响应（只含列表字段）
pub const SEVEN_USERS: &str = r#"[
    {"id":1,"name":"Leanne Graham","username":"Bret","email":"Sincere@april.biz","phone":"1-770-736-8031","company":{"name":"Romaguera-Crona"}},
    {"id":2,"name":"Ervin Howell","username":"Antonette","email":"Shanna@melissa.tv","phone":"010-692-6593","company":{"name":"Deckow-Crist"}},
    {"id":3,"name":"Clementine Bauch","username":"Samantha","email":"Nathan@yesenia.net","phone":"1-463-123-4447","company":{"name":"Romaguera-Jacobson"}},
    {"id":4,"name":"Patricia Lebsack","username":"Karianne","email":"Julianne.OConner@kory.org","phone":"493-170-9623","company":{"name":"Robel-Corkery"}},
    {"id":5,"name":"Chelsey Dietrich","username":"Kamren","email":"Lucio_Hettinger@annie.ca","phone":"(254)954-1289","company":{"name":"Keebler LLC"}},
    {"id":6,"name":"Mrs. Dennis Schulist","username":"Leopoldo_Corkery","email":"Karley_Dach@jasper.info","phone":"1-477-935-8478","company":{"name":"Considine-Lockman"}},
    {"id":7,"name":"Kurtis Weissnat","username":"Elwyn.Skiles","email":"Telly.Hoeger@billy.biz","phone":"210.067.6132","company":{"name":"Johns Group"}}
]"#;

/// 单用户详情响应
pub const USER_THREE: &str = r#"{
    "id": 3,
    "name": "Clementine Bauch",
    "username": "Samantha",
    "email": "Nathan@yesenia.net",
    "address": {
        "street": "Douglas Extension",
        "suite": "Suite 847",
        "city": "McKenziehaven",
        "zipcode": "59590-4157",
        "geo": {"lat": "-68.6102", "lng": "-47.0653"}
    },
    "phone": "1-463-123-4447",
    "website": "ramiro.info",
    "company": {
        "name": "Romaguera-Jacobson",
        "catchPhrase": "Face to face bifurcated interface",
        "bs": "e-enable strategic applications"
    }
}"#;
