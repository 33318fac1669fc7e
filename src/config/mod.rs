//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 환경 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! 개발, 테스트, 스테이징, 프로덕션 환경별로 다른 설정값을 제공합니다.
//!
//! ### 2. 타입 안전성 (Type Safety)
//!
//! - 설정값의 타입 검증
//! - 런타임 설정값 파싱 오류 처리
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 데이터 스토어
//! export MONGODB_URI="mongodb://localhost:27017"
//! export DATABASE_NAME="fitness_progress_dev"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # 환경 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! ```

pub mod data_config;

pub use data_config::*;
