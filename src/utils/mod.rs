//! 기동 시 터미널 출력 도우미
//!
//! `ServiceLocator::initialize_all()`의 진행 단계와 서버 시작 배너를 찍습니다.
//! 요청 처리 중 로그는 `log` 매크로를 사용하며 이 모듈을 거치지 않습니다.

pub mod display_terminal;
