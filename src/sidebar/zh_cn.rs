use super::{fixed, open};
use crate::types::{NavItem, NavSection, SidebarMap};

pub(super) fn sidebar() -> SidebarMap {
    let mut map = SidebarMap::new();
    // Stage 0 and stage 1 form one track and share a tree.
    let product = product_manager();
    map.insert("/zh-cn/stage-0/", product.clone());
    map.insert("/zh-cn/stage-1/", product);
    map.insert("/zh-cn/stage-2/", stage_2());
    map.insert("/zh-cn/stage-3/", stage_3());
    map.insert(
        "/zh-cn/guide/",
        vec![fixed("课程指南", &[("课程介绍", "/zh-cn/guide/introduction")])],
    );
    map.insert("/zh-cn/extra/", legacy_extra());
    map.insert("/zh-cn/examples/", legacy_examples());
    map.insert("/zh-cn/project/", legacy_project());
    map.insert("/zh-cn/appendix/", appendix());
    map
}

fn product_manager() -> Vec<NavSection> {
    vec![
        open(
            "新手入门",
            &[
                ("学习地图", "/zh-cn/stage-0/0.1-learning-map/"),
                (
                    "AI 时代，会说话就会编程",
                    "/zh-cn/stage-0/0.2-ai-capabilities-through-games/",
                ),
            ],
        ),
        open(
            "产品原型实战",
            &[
                ("学会 AI 编程工具", "/zh-cn/stage-1/1.1-introduction-to-ai-ide/"),
                ("找到好点子", "/zh-cn/stage-1/1.0-finding-great-idea/"),
                ("搭建产品原型", "/zh-cn/stage-1/1.2-building-prototype/"),
                ("接入 AI 能力", "/zh-cn/stage-1/1.3-integrating-ai-capabilities/"),
                ("完整项目实战", "/zh-cn/stage-1/1.4-complete-project-practice/"),
            ],
        ),
        open(
            "附录：业务思维",
            &[
                ("产品思维与方案设计", "/zh-cn/stage-1/appendix-a-product-thinking/"),
                (
                    "AI 行业应用场景参考 (B端)",
                    "/zh-cn/stage-1/appendix-industry-scenarios/",
                ),
                (
                    "AI 消费场景灵感参考 (C端)",
                    "/zh-cn/stage-1/appendix-c-consumer-scenarios/",
                ),
            ],
        ),
        open(
            "附录：技术方案",
            &[
                ("写代码时遇到错误怎么办", "/zh-cn/stage-1/appendix-b-common-errors/"),
                (
                    "七款 AI 编程工具对比",
                    "/zh-cn/stage-1/appendix-articles/example0-1/vibe-coding-tools-snake-game-tutorial",
                ),
                (
                    "用设计和编程 Agent 设计网站",
                    "/zh-cn/stage-1/appendix-articles/example0-2/vibe-coding-tools-build-website-with-ai-coding-and-design-agents",
                ),
            ],
        ),
    ]
}

fn stage_2() -> Vec<NavSection> {
    vec![
        open(
            "前端开发",
            &[
                ("前端零：使用 Lovart 生产素材", "/zh-cn/stage-2/frontend/2.0-lovart-assets/"),
                ("前端一：Figma 与 MasterGo 入门", "/zh-cn/stage-2/frontend/2.1-figma-mastergo/"),
                (
                    "前端二：构建第一个现代应用程序 - UI 设计",
                    "/zh-cn/stage-2/frontend/2.2-ui-design/",
                ),
                (
                    "前端三：参考 UI 设计规范与多产品 UI 设计",
                    "/zh-cn/stage-2/frontend/2.3-multi-product-ui/",
                ),
                ("前端四：一起做霍格沃茨画像", "/zh-cn/stage-2/frontend/2.4-hogwarts-portraits/"),
            ],
        ),
        open(
            "后端与全栈",
            &[
                ("后端一：什么是 API", "/zh-cn/stage-2/backend/2.1-what-is-api/extra2/"),
                (
                    "后端二：从数据库到 Supabase",
                    "/zh-cn/stage-2/backend/2.2-database-supabase/chapter5/",
                ),
                (
                    "后端三：大模型辅助编写接口代码与接口文档",
                    "/zh-cn/stage-2/backend/2.3-ai-interface-code/",
                ),
                ("后端四：Git 工作流", "/zh-cn/stage-2/backend/2.4-git-workflow/extra1/"),
                (
                    "后端五：如何部署 Web 应用",
                    "/zh-cn/stage-2/backend/2.5-zeabur-deployment/extra6/",
                ),
                ("后端六：现代 CLI 开发工具", "/zh-cn/stage-2/backend/2.6-modern-cli/extra7/"),
                (
                    "后端七：如何集成 Stripe 等收费系统",
                    "/zh-cn/stage-2/backend/2.7-stripe-payment/",
                ),
            ],
        ),
        open(
            "大作业",
            &[
                (
                    "大作业 1：构建第一个现代应用程序 - 全栈应用",
                    "/zh-cn/stage-2/assignments/2.1-fullstack-app/",
                ),
                (
                    "大作业 2：现代前端组件库 + Trae 实战",
                    "/zh-cn/stage-2/assignments/2.2-modern-frontend-trae/",
                ),
            ],
        ),
        open(
            "AI 能力附录",
            &[
                (
                    "AI 一：Dify 入门与知识库集成",
                    "/zh-cn/stage-2/ai-capabilities/2.1-dify-knowledge-base/chapter3/",
                ),
                (
                    "AI 二：学会查询 AI 词典与集成多模态 API",
                    "/zh-cn/stage-2/ai-capabilities/2.2-multimodal-api/extra3/",
                ),
            ],
        ),
    ]
}

fn stage_3() -> Vec<NavSection> {
    vec![
        open(
            "核心技能",
            &[
                (
                    "高级一：MCP 与 Claude Code Skills",
                    "/zh-cn/stage-3/core-skills/3.1-mcp-claude-code-skills/",
                ),
                (
                    "高级二：如何让 Coding Tools 长时间工作",
                    "/zh-cn/stage-3/core-skills/3.2-long-running-tasks/",
                ),
            ],
        ),
        open(
            "多平台开发",
            &[
                (
                    "高级三：如何构建微信小程序",
                    "/zh-cn/stage-3/cross-platform/3.3-wechat-miniprogram/",
                ),
                (
                    "高级四：如何构建微信小程序（包含后端）",
                    "/zh-cn/stage-3/cross-platform/3.4-wechat-miniprogram-backend/",
                ),
                (
                    "高级五：如何构建安卓程序-compose 原生开发",
                    "/zh-cn/stage-3/cross-platform/3.5-android-app/",
                ),
                (
                    "高级六：如何构建 iOS 程序-swiftUI原生开发",
                    "/zh-cn/stage-3/cross-platform/3.6-ios-app/",
                ),
            ],
        ),
        open(
            "个人品牌",
            &[(
                "高级七：如何构建属于自己的个人网页与学术博客",
                "/zh-cn/stage-3/personal-brand/3.7-personal-website-blog/",
            )],
        ),
        open(
            "AI 能力附录",
            &[
                (
                    "高级 AI 一：什么是 RAG 以及它如何工作",
                    "/zh-cn/stage-3/ai-advanced/3.a1-rag-introduction/",
                ),
                (
                    "高级 AI 二：中高级 RAG 与工作流编排 - 以 LangGraph 为例",
                    "/zh-cn/stage-3/ai-advanced/3.a2-langgraph-advanced-rag/",
                ),
            ],
        ),
    ]
}

// Legacy directories now point at the migrated stage chapters.

fn legacy_extra() -> Vec<NavSection> {
    vec![fixed(
        "Extra 扩展知识（旧版，已迁移到 Stage 2/3）",
        &[
            ("Extra 1: Git & GitHub", "/zh-cn/stage-2/backend/2.4-git-workflow/extra1/"),
            ("Extra 2: What is API", "/zh-cn/stage-2/backend/2.1-what-is-api/extra2/"),
            ("Extra 5: What is RAG", "/zh-cn/stage-3/ai-advanced/3.a1-rag-introduction/"),
            (
                "Extra 6: Zeabur Deployment",
                "/zh-cn/stage-2/backend/2.5-zeabur-deployment/extra6/",
            ),
            ("Extra 7: CLI AI Tools & TDD", "/zh-cn/stage-2/backend/2.6-modern-cli/extra7/"),
        ],
    )]
}

fn legacy_examples() -> Vec<NavSection> {
    vec![fixed(
        "Examples 实战案例（旧版，已迁移到 Stage 0/3）",
        &[
            (
                "Ex 0.1: Snake Game",
                "/zh-cn/examples/example0/example0-1/vibe-coding-tools-snake-game-tutorial",
            ),
            (
                "Ex 0.2: Build Website with AI",
                "/zh-cn/examples/example0/example0-2/vibe-coding-tools-build-website-with-ai-coding-and-design-agents",
            ),
        ],
    )]
}

fn legacy_project() -> Vec<NavSection> {
    vec![fixed(
        "Project 文档（旧版，已迁移到 Stage 2）",
        &[
            ("前端四：霍格沃茨画像", "/zh-cn/stage-2/frontend/2.4-hogwarts-portraits/"),
            (
                "后端二：Supabase 数据库",
                "/zh-cn/stage-2/backend/2.2-database-supabase/chapter5/",
            ),
            (
                "AI 一：Dify & Knowledge Base",
                "/zh-cn/stage-2/ai-capabilities/2.1-dify-knowledge-base/chapter3/",
            ),
        ],
    )]
}

fn appendix() -> Vec<NavSection> {
    const FUNDAMENTALS: &str = "/zh-cn/appendix/1-computer-fundamentals";
    const TOOLS: &str = "/zh-cn/appendix/2-development-tools";
    const FRONTEND: &str = "/zh-cn/appendix/3-browser-and-frontend";
    const BACKEND: &str = "/zh-cn/appendix/4-server-and-backend";
    const DATA: &str = "/zh-cn/appendix/5-data";
    const ARCHITECTURE: &str = "/zh-cn/appendix/6-architecture-and-system-design";
    const INFRA: &str = "/zh-cn/appendix/7-infrastructure-and-operations";
    const AI: &str = "/zh-cn/appendix/8-artificial-intelligence";
    const ENGINEERING: &str = "/zh-cn/appendix/9-engineering-excellence";

    vec![
        chapter(
            "一、计算机是怎么回事",
            FUNDAMENTALS,
            &[
                ("从晶体管到 CPU", "transistor-to-cpu"),
                ("操作系统（进程 / 内存 / 文件系统）", "operating-systems"),
                ("数据的编码、存储与传输", "data-encoding-storage"),
                ("网络：两台电脑如何对话", "computer-networks"),
                ("数据结构", "data-structures"),
                ("算法思维入门", "algorithm-thinking"),
                ("编程语言图谱", "programming-languages"),
                ("类型系统与编译原理入门", "type-systems-compilers"),
            ],
        ),
        chapter(
            "二、开发环境与工具",
            TOOLS,
            &[
                ("集成开发环境 (IDE) 基础", "ide-basics"),
                ("命令行与 Shell 脚本", "command-line-shell"),
                ("Git：代码的时光机", "git-version-control"),
                ("环境变量与 PATH", "environment-path"),
                ("端口与 localhost", "ports-localhost"),
                ("SSH 与密钥认证", "ssh-authentication"),
                ("包管理器（npm / pip / cargo）", "package-managers"),
                ("调试的艺术", "debugging-art/"),
                ("正则表达式", "regex"),
            ],
        ),
        chapter(
            "三、浏览器与前端",
            FRONTEND,
            &[
                ("JavaScript 语言深入", "javascript-deep-dive"),
                ("TypeScript：给 JS 加上类型系统", "typescript"),
                ("前端框架对比（React / Vue / Svelte / Angular）", "frontend-frameworks"),
                ("浏览器是一个操作系统", "browser-as-os"),
                ("浏览器渲染管道", "browser-as-os-rendering"),
                ("HTML / CSS 布局体系", "html-css-layout"),
                ("JavaScript 运行时", "javascript-runtime"),
                ("前端框架的本质", "frontend-framework-nature"),
                ("状态管理哲学", "state-management"),
                ("路由与导航", "routing-navigation"),
                ("图形与动画（Canvas / SVG / WebGL）", "graphics-animation"),
                ("实时通信（WebSocket / SSE）", "realtime-communication"),
                ("网页性能的度量与优化", "web-performance"),
                ("前端工程化全貌", "frontend-engineering"),
                ("无障碍与国际化", "a11n-i18n"),
            ],
        ),
        chapter(
            "四、服务器与后端",
            BACKEND,
            &[
                ("后端语言对比（Node.js / Go / Java / Rust）", "backend-languages"),
                ("客户端语言对比（Swift / Kotlin / Dart）", "client-languages"),
                (
                    "跨平台方案对比（React Native / Flutter / Electron / Tauri）",
                    "cross-platform",
                ),
                ("HTTP 协议", "http-protocol"),
                ("一个请求的完整旅程", "request-journey"),
                ("Web 框架的本质", "web-frameworks"),
                ("API 设计哲学（REST / GraphQL / gRPC）", "api-design"),
                ("API 入门", "api-intro"),
                ("序列化与数据格式", "serialization"),
                ("认证与授权体系", "auth-authorization"),
                ("并发、异步与多线程", "concurrency-async"),
                ("缓存的层次与策略", "caching"),
                ("消息队列与事件驱动", "message-queues"),
                ("异步任务队列与生产消费模型", "async-task-queues"),
                ("限流与背压控制", "rate-limiting-backpressure"),
                ("搜索引擎原理", "search-engines"),
                ("文件存储与对象存储", "file-storage"),
                ("后端分层架构", "backend-layered-architecture"),
            ],
        ),
        chapter(
            "五、数据",
            DATA,
            &[
                ("SQL", "sql"),
                ("数据库原理（索引 / 事务 / 查询优化）", "database-fundamentals"),
                ("数据模型全景（文档 / 图 / 时序 / 向量）", "data-models"),
                ("数据埋点与用户行为采集", "data-tracking"),
                ("数据分析基础（统计 / 指标 / 漏斗）", "data-analysis"),
                ("A/B 测试与实验驱动", "ab-testing"),
                ("数据可视化与仪表盘", "data-visualization"),
                ("数据治理与数据质量", "data-governance"),
            ],
        ),
        chapter(
            "六、架构与系统设计",
            ARCHITECTURE,
            &[
                ("从单体到微服务的演进", "monolith-to-microservices"),
                ("分布式系统的挑战", "distributed-systems"),
                ("高可用与容灾", "high-availability"),
                ("系统设计方法论", "system-design-methodology"),
            ],
        ),
        chapter(
            "七、基础设施与运维",
            INFRA,
            &[
                ("Linux 基础", "linux-basics"),
                ("Docker 容器化", "docker-containers"),
                ("Kubernetes 编排", "kubernetes"),
                ("CI / CD 自动化", "ci-cd"),
                ("域名、DNS 与 HTTPS", "dns-https"),
                ("负载均衡与网关", "load-balancing-gateway"),
                ("网关与反向代理", "gateway-proxy"),
                ("云平台实战", "cloud-platforms"),
                ("IAM 权限管理", "cloud-iam"),
                ("对象存储与 CDN", "cloud-storage-cdn"),
                ("基础设施即代码", "infrastructure-as-code"),
                ("监控、日志与告警", "monitoring-logging"),
                ("故障排查与应急响应", "incident-response"),
            ],
        ),
        chapter(
            "八、人工智能",
            AI,
            &[
                ("AI 简史与核心概念", "ai-history"),
                ("神经网络与深度学习", "neural-networks"),
                ("Transformer 与注意力机制", "transformer-attention"),
                ("大语言模型的工作原理", "llm-principles"),
                ("提示词工程", "prompt-engineering"),
                ("上下文工程", "context-engineering"),
                ("多模态模型（视觉 / 音频 / 视频）", "multimodal-models"),
                ("图像生成原理", "image-generation"),
                ("语音合成与识别", "speech-synthesis-recognition"),
                ("Embedding 与向量检索", "embedding-vector-retrieval"),
                ("RAG 架构", "rag"),
                ("AI Agent 与工具调用", "ai-agents"),
                ("AI 协议（MCP & A2A）", "ai-protocols"),
                ("模型微调与部署", "model-finetuning-deployment"),
                ("AI 原生应用设计", "ai-native-app-design"),
                ("AI 能力词典", "ai-capability-dictionary"),
            ],
        ),
        chapter(
            "九、工程素养",
            ENGINEERING,
            &[
                ("代码质量与重构", "code-quality-refactoring"),
                ("测试策略", "testing-strategies"),
                ("设计模式", "design-patterns"),
                ("安全思维与攻防基础", "security-thinking"),
                ("技术文档写作", "technical-writing"),
                ("开源协作", "open-source-collaboration"),
                ("技术选型方法论", "technology-selection"),
            ],
        ),
    ]
}

/// Appendix chapter whose pages all live under one directory.
fn chapter(text: &str, dir: &str, pages: &[(&str, &str)]) -> NavSection {
    NavSection {
        items: pages
            .iter()
            .map(|(title, page)| NavItem::new(*title, format!("{dir}/{page}")).into())
            .collect(),
        ..open(text, &[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SidebarItem;

    #[test]
    fn stage_0_and_1_share_a_tree() {
        let map = sidebar();
        assert_eq!(map.get("/zh-cn/stage-0/"), map.get("/zh-cn/stage-1/"));
        assert_eq!(map.get("/zh-cn/stage-0/").unwrap().len(), 4);
    }

    #[test]
    fn prefixes_in_rendering_order() {
        let map = sidebar();
        let prefixes: Vec<_> = map.prefixes().collect();
        assert_eq!(
            prefixes,
            [
                "/zh-cn/stage-0/",
                "/zh-cn/stage-1/",
                "/zh-cn/stage-2/",
                "/zh-cn/stage-3/",
                "/zh-cn/guide/",
                "/zh-cn/extra/",
                "/zh-cn/examples/",
                "/zh-cn/project/",
                "/zh-cn/appendix/",
            ]
        );
    }

    #[test]
    fn link_count() {
        assert_eq!(sidebar().links().len(), 160);
    }

    #[test]
    fn every_link_stays_in_locale() {
        for item in sidebar().links() {
            assert!(item.link.starts_with("/zh-cn/"), "{}", item.link);
        }
    }

    #[test]
    fn legacy_groups_are_not_collapsible() {
        let map = sidebar();
        for prefix in ["/zh-cn/guide/", "/zh-cn/extra/", "/zh-cn/examples/", "/zh-cn/project/"] {
            for section in map.get(prefix).unwrap() {
                assert_eq!(section.collapsed, None, "{prefix}");
            }
        }
    }

    #[test]
    fn appendix_chapters_join_directory_and_page() {
        let map = sidebar();
        let appendix = map.get("/zh-cn/appendix/").unwrap();
        assert_eq!(appendix.len(), 9);
        let SidebarItem::Link(first) = &appendix[0].items[0] else {
            panic!("expected a link");
        };
        assert_eq!(first.text, "从晶体管到 CPU");
        assert_eq!(
            first.link,
            "/zh-cn/appendix/1-computer-fundamentals/transistor-to-cpu"
        );
        let ai = appendix.iter().find(|s| s.text == "八、人工智能").unwrap();
        assert_eq!(ai.items.len(), 16);
    }
}
