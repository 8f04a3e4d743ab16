//! 터미널 출력 포맷팅 유틸리티
//!
//! 서버 기동과 서비스 레지스트리 초기화 과정을 터미널에 보기 좋게 출력합니다.
//! 포맷 함수(`format_*`)는 문자열을 만들고, 출력 함수(`print_*`)는 그것을 stdout에 씁니다.

/// 박스 내부 콘텐츠 너비
const BOX_WIDTH: usize = 50;

/// 박스 형태로 둘러싸인 제목 문자열을 만듭니다.
///
/// 제목은 박스 안에서 중앙 정렬됩니다.
///
/// ```text
/// ╔══════════════════════════════════════════════════╗
/// ║                  System Started                  ║
/// ╚══════════════════════════════════════════════════╝
/// ```
pub fn format_boxed_title(title: &str) -> String {
    let border = "═".repeat(BOX_WIDTH);
    format!(
        "╔{border}╗\n║{title:^width$}║\n╚{border}╝",
        border = border,
        title = title,
        width = BOX_WIDTH - 1
    )
}

pub fn print_boxed_title(title: &str) {
    println!("{}", format_boxed_title(title));
}

pub fn print_step_start(step: u8, description: &str) {
    println!("→ Step {}: {}", step, description);
}

pub fn print_step_complete(step: u8, description: &str, count: usize) {
    println!("✓ Step {}: {} ({} items)", step, description, count);
}

pub fn print_sub_task(name: &str, status: &str) {
    println!("   ├─ {}: {}", name, status);
}

/// 레지스트리 초기화 결과 요약을 출력합니다.
pub fn print_final_summary(repos: usize, services: usize) {
    println!();
    print_boxed_title("🎉 SERVICE REGISTRY INITIALIZED");
    println!("   📦 Repositories: {}", repos);
    println!("   🔧 Services: {}", services);
    println!("   🚀 Total Components: {}", repos + services);
    println!();
}

pub fn print_cache_initialized(cache_type: &str, count: usize) {
    println!("   ├─ {} Cache: {} entries loaded", cache_type, count);
}

/// 서버 기동 배너 문자열을 만듭니다.
///
/// # Arguments
///
/// * `storage` - 사용 중인 저장소 백엔드 이름 (`mongo`, `memory`)
/// * `bind_address` - 바인딩 주소 (`host:port`)
pub fn format_startup_banner(storage: &str, bind_address: &str) -> String {
    format!(
        "{}\n   🗄️  Storage: {}\n   🌐 Listening: http://{}\n   📍 Health: http://{}/health",
        format_boxed_title("📚 DICT ADMIN BACKEND"),
        storage,
        bind_address,
        bind_address
    )
}

pub fn print_startup_banner(storage: &str, bind_address: &str) {
    println!("{}", format_startup_banner(storage, bind_address));
}
